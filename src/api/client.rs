//! HTTP API Client
//!
//! Request wrappers for the Lost & Found portal REST API.
//!
//! List and probe helpers swallow transport and decoding failures: they log to
//! the console and return an empty collection (or `None`), so callers can
//! always render something. Mutating helpers return the server's `message` on
//! success and an [`ApiError`] otherwise; a body carrying neither `message`
//! nor `error` maps to [`ApiError::EmptyReply`] instead of a silent no-op.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::api::error::ApiError;
use crate::state::models::{Claim, Item, User, UserKind};

/// Base URL of the portal API
pub const API_BASE: &str = "http://localhost:8080/api";

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct UserListResponse {
    users: Vec<User>,
}

#[derive(Debug, serde::Deserialize)]
struct ItemListResponse {
    items: Vec<Item>,
}

#[derive(Debug, serde::Deserialize)]
struct PendingAdminListResponse {
    pending_admins: Vec<User>,
}

#[derive(Debug, serde::Deserialize)]
struct ClaimListResponse {
    claims: Vec<Claim>,
}

#[derive(Debug, serde::Deserialize)]
struct CurrentUserResponse {
    #[serde(default)]
    user: Option<User>,
}

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    error: Option<String>,
}

/// `{message}` / `{error}` body returned by every mutating endpoint
#[derive(Debug, serde::Deserialize)]
struct MutationResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl MutationResponse {
    /// Collapse to the success message, the server's rejection, or the
    /// neither-key case. `message` wins when both are present.
    fn into_result(self) -> Result<String, ApiError> {
        match (self.message, self.error) {
            (Some(message), _) => Ok(message),
            (None, Some(error)) => Err(ApiError::Rejected(error)),
            (None, None) => Err(ApiError::EmptyReply),
        }
    }
}

// ============ Request Types ============

/// Registration form payload. `request_admin` goes on the wire only for Admin
/// signups that actually ticked the box; the key is absent otherwise.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SignupRequest {
    pub fname: String,
    pub mname: String,
    pub lname: String,
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_admin: Option<bool>,
}

impl SignupRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fname: &str,
        mname: &str,
        lname: &str,
        kind: UserKind,
        email: &str,
        username: &str,
        password: &str,
        request_admin: bool,
    ) -> Self {
        Self {
            fname: fname.to_string(),
            mname: mname.to_string(),
            lname: lname.to_string(),
            kind,
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            request_admin: (kind == UserKind::Admin && request_admin).then_some(true),
        }
    }
}

/// Profile form payload. `password` is only populated when the user typed a
/// new one; an empty field never reaches the wire.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileUpdate {
    pub fname: String,
    pub mname: String,
    pub lname: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn new(
        fname: &str,
        mname: &str,
        lname: &str,
        email: &str,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            fname: fname.to_string(),
            mname: mname.to_string(),
            lname: lname.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }
}

/// Admin decision on a pending claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimDecision {
    Approve,
    Reject,
}

impl ClaimDecision {
    fn action(self) -> &'static str {
        match self {
            ClaimDecision::Approve => "approve",
            ClaimDecision::Reject => "reject",
        }
    }
}

// ============ Fetch Helpers ============

/// Log a swallowed fetch failure to the browser console
fn log_fetch_error(what: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, err).into());
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;

    Ok(response.json().await?)
}

/// Fetch all registered users
pub async fn fetch_users() -> Vec<User> {
    match get_json::<UserListResponse>(&format!("{}/users", API_BASE)).await {
        Ok(body) => body.users,
        Err(err) => {
            log_fetch_error("users", &err);
            Vec::new()
        }
    }
}

/// Fetch all reported items. Carries a cache-busting timestamp so a reload
/// right after a mutation never sees a stale cached list.
pub async fn fetch_items() -> Vec<Item> {
    let url = format!(
        "{}/items?_={}",
        API_BASE,
        chrono::Utc::now().timestamp_millis()
    );
    match get_json::<ItemListResponse>(&url).await {
        Ok(body) => body.items,
        Err(err) => {
            log_fetch_error("items", &err);
            Vec::new()
        }
    }
}

/// Fetch accounts awaiting admin elevation
pub async fn fetch_pending_admins() -> Vec<User> {
    match get_json::<PendingAdminListResponse>(&format!("{}/users/pending-admins", API_BASE)).await
    {
        Ok(body) => body.pending_admins,
        Err(err) => {
            log_fetch_error("pending admins", &err);
            Vec::new()
        }
    }
}

/// Probe the server-side session for a logged-in user
pub async fn fetch_current_user() -> Option<User> {
    match get_json::<CurrentUserResponse>(&format!("{}/users/current", API_BASE)).await {
        Ok(body) => body.user,
        Err(err) => {
            log_fetch_error("current user", &err);
            None
        }
    }
}

/// Fetch the claims submitted by one user
pub async fn fetch_user_claims(username: &str) -> Vec<Claim> {
    let url = format!("{}/claims?action=user&username={}", API_BASE, username);
    match get_json::<ClaimListResponse>(&url).await {
        Ok(body) => body.claims,
        Err(err) => {
            log_fetch_error("user claims", &err);
            Vec::new()
        }
    }
}

/// Fetch all claims awaiting review
pub async fn fetch_pending_claims() -> Vec<Claim> {
    let url = format!("{}/claims?action=pending", API_BASE);
    match get_json::<ClaimListResponse>(&url).await {
        Ok(body) => body.claims,
        Err(err) => {
            log_fetch_error("pending claims", &err);
            Vec::new()
        }
    }
}

// ============ Mutating Calls ============

async fn mutation_result(response: gloo_net::http::Response) -> Result<String, ApiError> {
    let body: MutationResponse = response.json().await?;
    body.into_result()
}

/// Register a new account
pub async fn sign_up(request: &SignupRequest) -> Result<String, ApiError> {
    let response = Request::post(&format!("{}/users", API_BASE))
        .json(request)?
        .send()
        .await?;
    mutation_result(response).await
}

/// Log in with credentials. Success returns the authenticated user and sets
/// the session cookie; a rejection carries the server's error text.
pub async fn login(username: &str, password: &str) -> Result<User, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/users/login", API_BASE))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest { username, password })?
        .send()
        .await?;

    let body: LoginResponse = response.json().await?;
    match (body.user, body.error) {
        (Some(user), _) => Ok(user),
        (None, Some(error)) => Err(ApiError::Rejected(error)),
        (None, None) => Err(ApiError::EmptyReply),
    }
}

/// Log out the current session
pub async fn logout() -> Result<String, ApiError> {
    let response = Request::post(&format!("{}/users/logout", API_BASE))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    mutation_result(response).await
}

/// Update the profile of `username` with the submitted fields
pub async fn update_user(username: &str, update: &ProfileUpdate) -> Result<String, ApiError> {
    let response = Request::put(&format!("{}/users?username={}", API_BASE, username))
        .credentials(RequestCredentials::Include)
        .json(update)?
        .send()
        .await?;
    mutation_result(response).await
}

/// Remove a user account by username
pub async fn delete_user(username: &str) -> Result<String, ApiError> {
    let response = Request::delete(&format!("{}/users?username={}", API_BASE, username))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    mutation_result(response).await
}

/// Elevate a pending admin account, naming the approving admin
pub async fn approve_admin(username: &str, approver_username: &str) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct ApproveAdminRequest<'a> {
        username: &'a str,
        approver_username: &'a str,
    }

    let response = Request::post(&format!("{}/users/approve-admin", API_BASE))
        .credentials(RequestCredentials::Include)
        .json(&ApproveAdminRequest {
            username,
            approver_username,
        })?
        .send()
        .await?;
    mutation_result(response).await
}

/// Report an item, optionally with a photo, as multipart form data
pub async fn report_item(
    status: &str,
    name: &str,
    desc: &str,
    reported_by: &str,
    image: Option<web_sys::File>,
) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    let _ = form.append_with_str("status", status);
    let _ = form.append_with_str("name", name);
    let _ = form.append_with_str("desc", desc);
    let _ = form.append_with_str("reportedBy", reported_by);
    if let Some(file) = image {
        let _ = form.append_with_blob("image", &file);
    }

    let response = Request::post(&format!("{}/items", API_BASE))
        .credentials(RequestCredentials::Include)
        .body(form)?
        .send()
        .await?;
    mutation_result(response).await
}

/// Delete an item report by numeric id
pub async fn delete_item(id: u32) -> Result<String, ApiError> {
    let response = Request::delete(&format!("{}/items?id={}", API_BASE, id))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    mutation_result(response).await
}

/// Submit an ownership claim against a Found item
pub async fn create_claim(
    item_id: u32,
    claimant_username: &str,
    claim_description: &str,
) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct CreateClaimRequest<'a> {
        action: &'a str,
        item_id: u32,
        claimant_username: &'a str,
        claim_description: &'a str,
    }

    let response = Request::post(&format!("{}/claims", API_BASE))
        .credentials(RequestCredentials::Include)
        .json(&CreateClaimRequest {
            action: "create",
            item_id,
            claimant_username,
            claim_description,
        })?
        .send()
        .await?;
    mutation_result(response).await
}

/// Approve or reject a pending claim, naming the deciding admin
pub async fn decide_claim(
    decision: ClaimDecision,
    id: u32,
    approver_username: &str,
) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct ClaimDecisionRequest<'a> {
        action: &'a str,
        id: u32,
        approver_username: &'a str,
    }

    let response = Request::post(&format!("{}/claims", API_BASE))
        .credentials(RequestCredentials::Include)
        .json(&ClaimDecisionRequest {
            action: decision.action(),
            id,
            approver_username,
        })?
        .send()
        .await?;
    mutation_result(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_body(kind: UserKind, checked: bool) -> serde_json::Value {
        let request = SignupRequest::new(
            "Ana", "M", "Reyes", kind, "ana@uep.edu", "anar", "hunter2", checked,
        );
        serde_json::to_value(request).unwrap()
    }

    #[test]
    fn signup_sends_admin_request_only_for_checked_admins() {
        let body = signup_body(UserKind::Admin, true);
        assert_eq!(body["request_admin"], serde_json::json!(true));
        assert_eq!(body["type"], "Admin");

        let body = signup_body(UserKind::Admin, false);
        assert!(body.get("request_admin").is_none());

        let body = signup_body(UserKind::User, true);
        assert!(body.get("request_admin").is_none());
        assert_eq!(body["type"], "User");
    }

    #[test]
    fn profile_update_omits_blank_password() {
        let update = ProfileUpdate::new("Ana", "M", "Reyes", "ana@uep.edu", "anar", "");
        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("password").is_none());

        let update = ProfileUpdate::new("Ana", "M", "Reyes", "ana@uep.edu", "anar", "s3cret");
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["password"], "s3cret");
    }

    #[test]
    fn mutation_body_without_message_or_error_is_a_distinct_error() {
        let body: MutationResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(body.into_result(), Err(ApiError::EmptyReply)));
    }

    #[test]
    fn mutation_body_message_wins_and_error_rejects() {
        let body: MutationResponse = serde_json::from_str(r#"{"message":"User removed"}"#).unwrap();
        assert_eq!(body.into_result().unwrap(), "User removed");

        let body: MutationResponse =
            serde_json::from_str(r#"{"error":"Username already taken"}"#).unwrap();
        match body.into_result() {
            Err(ApiError::Rejected(text)) => assert_eq!(text, "Username already taken"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
