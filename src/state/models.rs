//! Domain Models
//!
//! Wire types exchanged with the portal API, plus the pure client-side rules
//! that operate on them: search filters and claim-input validation.

use serde::{Deserialize, Serialize};

/// Account type, driving which dashboard an authenticated user sees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum UserKind {
    User,
    Admin,
}

impl UserKind {
    /// Parse the form/wire representation; anything unknown is a plain user
    pub fn parse(value: &str) -> Self {
        match value {
            "Admin" => UserKind::Admin,
            _ => UserKind::User,
        }
    }
}

impl std::fmt::Display for UserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserKind::User => write!(f, "User"),
            UserKind::Admin => write!(f, "Admin"),
        }
    }
}

/// A registered account as returned by the server (the password never
/// round-trips)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub fname: String,
    #[serde(default)]
    pub mname: String,
    pub lname: String,
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
    pub username: String,
}

impl User {
    /// Display name with the middle name folded in only when present
    pub fn full_name(&self) -> String {
        if self.mname.is_empty() {
            format!("{} {}", self.fname, self.lname)
        } else {
            format!("{} {} {}", self.fname, self.mname, self.lname)
        }
    }

    /// Nav banner line for the signed-in user
    pub fn welcome_banner(&self) -> String {
        format!("Welcome, {} ({})", self.fname, self.kind)
    }
}

/// A reported item. Status is an open set on the wire (`Lost`, `Found`,
/// `Returned`, `Claimed`, ...), so it stays a string.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub image: String,
    pub status: String,
    #[serde(rename = "reportedBy")]
    pub reported_by: String,
    #[serde(rename = "dateReported", default)]
    pub date_reported: String,
}

impl Item {
    /// Only Found items can be claimed
    pub fn is_claimable(&self) -> bool {
        self.status == "Found"
    }

    /// Description shortened for table rows
    pub fn short_desc(&self) -> String {
        if self.desc.chars().count() > 30 {
            let head: String = self.desc.chars().take(30).collect();
            format!("{}...", head)
        } else {
            self.desc.clone()
        }
    }
}

/// An ownership claim against a Found item, subject to admin review
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Claim {
    pub id: u32,
    #[serde(default)]
    pub item_id: u32,
    pub item_name: String,
    #[serde(default)]
    pub claimant_username: String,
    #[serde(default)]
    pub claimant_name: String,
    pub claim_description: String,
    pub status: String,
    #[serde(default)]
    pub date_submitted: String,
}

/// Case-insensitive substring filter over name and description, as used by
/// the user dashboard search. The source list is untouched.
pub fn filter_items_user(items: &[Item], query: &str) -> Vec<Item> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query) || item.desc.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Admin variant of the item search: also matches on status
pub fn filter_items_admin(items: &[Item], query: &str) -> Vec<Item> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item.desc.to_lowercase().contains(&query)
                || item.status.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Normalize a claim justification: trimmed, and rejected outright when empty
/// or whitespace-only
pub fn validate_claim_description(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, desc: &str, status: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            desc: desc.to_string(),
            image: String::new(),
            status: status.to_string(),
            reported_by: "reporter".to_string(),
            date_reported: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn user_search_matches_name_and_desc_case_insensitively() {
        let items = vec![
            item(1, "Black Umbrella", "left at the library", "Lost"),
            item(2, "Wallet", "brown leather", "Found"),
        ];

        let hits = filter_items_user(&items, "UMBRELLA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_items_user(&items, "leather");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        // Status is not searchable for plain users
        assert!(filter_items_user(&items, "found").is_empty());
    }

    #[test]
    fn admin_search_also_matches_status() {
        let items = vec![
            item(1, "Black Umbrella", "left at the library", "Lost"),
            item(2, "Wallet", "brown leather", "Found"),
        ];

        let hits = filter_items_admin(&items, "found");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn search_does_not_mutate_the_source_list() {
        let items = vec![
            item(1, "Black Umbrella", "left at the library", "Lost"),
            item(2, "Wallet", "brown leather", "Found"),
        ];
        let before = items.clone();

        let _ = filter_items_admin(&items, "wallet");
        let _ = filter_items_user(&items, "umbrella");
        assert_eq!(items, before);
    }

    #[test]
    fn blank_claim_descriptions_are_rejected() {
        assert_eq!(validate_claim_description(""), None);
        assert_eq!(validate_claim_description("   \t "), None);
        assert_eq!(
            validate_claim_description("  it has my initials  "),
            Some("it has my initials".to_string())
        );
    }

    #[test]
    fn only_found_items_are_claimable() {
        let items = vec![
            item(1, "Black Umbrella", "left at the library", "Lost"),
            item(2, "Wallet", "brown leather", "Found"),
        ];

        let claimable: Vec<_> = items.iter().filter(|i| i.is_claimable()).collect();
        assert_eq!(claimable.len(), 1);
        assert_eq!(claimable[0].id, 2);
    }

    #[test]
    fn full_name_skips_a_missing_middle_name() {
        let mut user = User {
            fname: "Ana".to_string(),
            mname: "M".to_string(),
            lname: "Reyes".to_string(),
            kind: UserKind::User,
            email: "ana@uep.edu".to_string(),
            username: "anar".to_string(),
        };
        assert_eq!(user.full_name(), "Ana M Reyes");

        user.mname.clear();
        assert_eq!(user.full_name(), "Ana Reyes");
    }

    #[test]
    fn item_decodes_wire_field_names() {
        let json = r#"{
            "id": 7,
            "name": "Calculator",
            "desc": "scientific, scratched case",
            "image": "/uploads/7.jpg",
            "status": "Found",
            "reportedBy": "guard01",
            "dateReported": "2024-03-12"
        }"#;
        let decoded: Item = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.reported_by, "guard01");
        assert_eq!(decoded.date_reported, "2024-03-12");
        assert!(decoded.is_claimable());
    }

    #[test]
    fn welcome_banner_names_the_account_type() {
        let user = User {
            fname: "Ana".to_string(),
            mname: String::new(),
            lname: "Reyes".to_string(),
            kind: UserKind::Admin,
            email: "ana@uep.edu".to_string(),
            username: "anar".to_string(),
        };
        assert_eq!(user.welcome_banner(), "Welcome, Ana (Admin)");
    }
}
