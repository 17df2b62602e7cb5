//! Action Commands
//!
//! One named async function per user-facing operation. Components invoke
//! these through `spawn_local`; each command validates its input, drives the
//! API client, surfaces the outcome through the toast signals, and re-fetches
//! whatever the mutation invalidated. Commands never touch component-local
//! state, so any surface can trigger any of them.

use leptos::*;

use crate::api::{self, ClaimDecision, ProfileUpdate, SignupRequest};
use crate::state::models::{validate_claim_description, User, UserKind};
use crate::state::session::{SessionState, UserTab, View};

// ============ Dialogs ============

/// Blocking yes/no confirmation; destructive commands never fire without one
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking free-text prompt; `None` when cancelled
fn prompt(message: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message(message).ok())
        .flatten()
}

// ============ Loaders ============

/// Probe the server session on startup and, when one exists, open the
/// matching dashboard with its data already loaded
pub async fn restore_session(state: SessionState) {
    match api::fetch_current_user().await {
        Some(user) => open_dashboard(&state, user).await,
        None => state.view.set(View::Login),
    }
}

/// Load the dashboard matching the account type, then route to it
async fn open_dashboard(state: &SessionState, user: User) {
    match user.kind {
        UserKind::Admin => load_admin_dashboard(state).await,
        UserKind::User => load_user_dashboard(state).await,
    }
    state.sign_in(user);
}

/// Reload everything the admin dashboard shows: users, items, then pending
/// admins, in that order
pub async fn load_admin_dashboard(state: &SessionState) {
    let users = api::fetch_users().await;
    state.users.set(users);

    let items = api::fetch_items().await;
    state.items.set(items);

    let pending = api::fetch_pending_admins().await;
    state.pending_admins.set(pending);
}

/// Reload the item grid backing the user dashboard
pub async fn load_user_dashboard(state: &SessionState) {
    let items = api::fetch_items().await;
    state.items.set(items);
}

/// Refresh the account list backing the admin user-information tab
pub async fn load_user_information(state: &SessionState) {
    let users = api::fetch_users().await;
    state.users.set(users);
}

/// Reload the claims awaiting review
pub async fn load_pending_claims(state: &SessionState) {
    let claims = api::fetch_pending_claims().await;
    state.pending_claims.set(claims);
}

/// Reload the signed-in user's own claims
pub async fn load_my_claims(state: &SessionState) {
    let Some(user) = state.current_user.get_untracked() else {
        return;
    };
    let claims = api::fetch_user_claims(&user.username).await;
    state.my_claims.set(claims);
}

// ============ Auth ============

/// Submit the registration form. Returns true when the account was created,
/// so the form can reset; on rejection the form stays populated.
pub async fn sign_up(state: SessionState, request: SignupRequest) -> bool {
    match api::sign_up(&request).await {
        Ok(message) => {
            state.show_success(&message);
            state.view.set(View::Login);
            true
        }
        Err(err) => {
            state.show_error(&err.to_string());
            false
        }
    }
}

/// Authenticate and open the dashboard matching the account type. The
/// dashboard data loads before the view switches so its tables never flash
/// empty. Returns true so the login form can reset.
pub async fn sign_in(state: SessionState, username: String, password: String) -> bool {
    match api::login(&username, &password).await {
        Ok(user) => {
            open_dashboard(&state, user).await;
            true
        }
        Err(err) => {
            state.show_error(&err.to_string());
            false
        }
    }
}

/// End the server session and return to login
pub async fn sign_out(state: SessionState) {
    match api::logout().await {
        Ok(_) => state.sign_out(),
        Err(err) => state.show_error(&err.to_string()),
    }
}

// ============ Admin ============

/// Delete an account after confirmation, then reload the whole dashboard.
/// Also serves as the reject path for pending admin requests.
pub async fn remove_user(state: SessionState, username: String) {
    if !confirm("Are you sure you want to remove this user?") {
        return;
    }
    match api::delete_user(&username).await {
        Ok(message) => {
            state.show_success(&message);
            load_admin_dashboard(&state).await;
        }
        Err(err) => state.show_error(&err.to_string()),
    }
}

/// Delete an item report after confirmation, then reload the whole dashboard
pub async fn remove_item(state: SessionState, id: u32) {
    if !confirm("Are you sure you want to delete this item report?") {
        return;
    }
    match api::delete_item(id).await {
        Ok(message) => {
            state.show_success(&message);
            load_admin_dashboard(&state).await;
        }
        Err(err) => state.show_error(&err.to_string()),
    }
}

/// Elevate a pending admin request, naming the signed-in admin as approver
pub async fn approve_admin(state: SessionState, username: String) {
    let Some(approver) = state.current_user.get_untracked() else {
        return;
    };
    if !confirm("Are you sure you want to approve this admin request?") {
        return;
    }
    match api::approve_admin(&username, &approver.username).await {
        Ok(message) => {
            state.show_success(&message);
            load_admin_dashboard(&state).await;
        }
        Err(err) => state.show_error(&err.to_string()),
    }
}

/// Approve or reject a pending claim, then reload the pending list
pub async fn decide_claim(state: SessionState, decision: ClaimDecision, id: u32) {
    let Some(approver) = state.current_user.get_untracked() else {
        return;
    };
    let question = match decision {
        ClaimDecision::Approve => "Are you sure you want to approve this claim?",
        ClaimDecision::Reject => "Are you sure you want to reject this claim?",
    };
    if !confirm(question) {
        return;
    }
    match api::decide_claim(decision, id, &approver.username).await {
        Ok(message) => {
            state.show_success(&message);
            load_pending_claims(&state).await;
        }
        Err(err) => state.show_error(&err.to_string()),
    }
}

// ============ User ============

/// Submit a new item report. On success the form resets (signalled by the
/// return value), the view switches back to the item grid, and the grid
/// reloads.
pub async fn report_item(
    state: SessionState,
    status: String,
    name: String,
    desc: String,
    image: Option<web_sys::File>,
) -> bool {
    let Some(user) = state.current_user.get_untracked() else {
        state.show_error("You must be logged in to report an item.");
        return false;
    };
    match api::report_item(&status, &name, &desc, &user.username, image).await {
        Ok(message) => {
            state.show_success(&message);
            state.user_tab.set(UserTab::ViewItems);
            load_user_dashboard(&state).await;
            true
        }
        Err(err) => {
            state.show_error(&err.to_string());
            false
        }
    }
}

/// Claim a Found item: prompt for a justification, reject blank input before
/// any network traffic, then submit and reload the grid
pub async fn claim_item(state: SessionState, item_id: u32, item_name: String) {
    let Some(user) = state.current_user.get_untracked() else {
        return;
    };
    let Some(input) = prompt(&format!(
        "Please describe why you believe \"{}\" is yours:",
        item_name
    )) else {
        return;
    };
    let Some(description) = validate_claim_description(&input) else {
        state.show_error("Claim description is required.");
        return;
    };
    match api::create_claim(item_id, &user.username, &description).await {
        Ok(message) => {
            state.show_success(&message);
            load_user_dashboard(&state).await;
        }
        Err(err) => state.show_error(&err.to_string()),
    }
}

/// Push the profile form to the server, then patch the session copy in place
/// (no re-fetch). Returns true so the form can reload from the patched state.
pub async fn update_profile(state: SessionState, update: ProfileUpdate) -> bool {
    let Some(user) = state.current_user.get_untracked() else {
        return false;
    };
    match api::update_user(&user.username, &update).await {
        Ok(_) => {
            state.merge_profile(&user.username, &update);
            state.show_success("Profile updated successfully!");
            true
        }
        Err(err) => {
            state.show_error(&err.to_string());
            false
        }
    }
}
