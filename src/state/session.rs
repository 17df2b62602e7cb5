//! Session State & View Routing
//!
//! The explicit session context shared by every component: the nullable
//! current user, the visible view and dashboard tabs, the last-fetched
//! collections, and the toast signals. `current_user` is written only by the
//! transition methods in this module, so a stale response can never sneak an
//! old identity back into a closed session.

use leptos::*;

use crate::api::ProfileUpdate;
use crate::state::models::{Claim, Item, User, UserKind};

/// Top-level sections; exactly one is ever visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    AdminDashboard,
    UserDashboard,
}

/// Tabs of the admin dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Users,
    Items,
    PendingAdmins,
    UserInfo,
    Claims,
}

/// Tabs of the user dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserTab {
    ViewItems,
    ReportItem,
    MyClaims,
    Profile,
}

/// Session and UI state provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Authenticated user, if any; written only by the transition methods
    pub current_user: RwSignal<Option<User>>,
    /// Visible top-level section
    pub view: RwSignal<View>,
    /// Active tab within the admin dashboard
    pub admin_tab: RwSignal<AdminTab>,
    /// Active tab within the user dashboard
    pub user_tab: RwSignal<UserTab>,
    /// Last-fetched item list, replaced wholesale on every reload
    pub items: RwSignal<Vec<Item>>,
    /// Last-fetched user list (admin dashboard)
    pub users: RwSignal<Vec<User>>,
    /// Accounts awaiting admin elevation (admin dashboard)
    pub pending_admins: RwSignal<Vec<User>>,
    /// Claims awaiting review (admin claims tab)
    pub pending_claims: RwSignal<Vec<Claim>>,
    /// The signed-in user's own claims (user claims tab)
    pub my_claims: RwSignal<Vec<Claim>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        current_user: create_rw_signal(None),
        view: create_rw_signal(View::Login),
        admin_tab: create_rw_signal(AdminTab::Users),
        user_tab: create_rw_signal(UserTab::ViewItems),
        items: create_rw_signal(Vec::new()),
        users: create_rw_signal(Vec::new()),
        pending_admins: create_rw_signal(Vec::new()),
        pending_claims: create_rw_signal(Vec::new()),
        my_claims: create_rw_signal(Vec::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// Route an authenticated user to the dashboard matching their type.
    /// Callers load that dashboard's data first so its tables never flash
    /// empty.
    pub fn sign_in(&self, user: User) {
        let view = match user.kind {
            UserKind::Admin => View::AdminDashboard,
            UserKind::User => View::UserDashboard,
        };
        self.current_user.set(Some(user));
        self.admin_tab.set(AdminTab::Users);
        self.user_tab.set(UserTab::ViewItems);
        self.view.set(view);
    }

    /// Clear the session and return to the login view
    pub fn sign_out(&self) {
        self.current_user.set(None);
        self.view.set(View::Login);
    }

    /// Shallow-merge a successful profile update into the session user.
    /// Dropped when `subject` no longer matches the signed-in username, so a
    /// response resolving after logout (or after another sign-in) is ignored.
    pub fn merge_profile(&self, subject: &str, update: &ProfileUpdate) {
        self.current_user.update(|current| {
            if let Some(user) = current {
                if user.username == subject {
                    *user = apply_profile_fields(user, update);
                }
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Apply submitted profile fields over the session copy of the user. The
/// password is write-only and the account type never changes through the
/// profile form.
fn apply_profile_fields(user: &User, update: &ProfileUpdate) -> User {
    User {
        fname: update.fname.clone(),
        mname: update.mname.clone(),
        lname: update.lname.clone(),
        kind: user.kind,
        email: update.email.clone(),
        username: update.username.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_user() -> User {
        User {
            fname: "Ana".to_string(),
            mname: "M".to_string(),
            lname: "Reyes".to_string(),
            kind: UserKind::User,
            email: "ana@uep.edu".to_string(),
            username: "anar".to_string(),
        }
    }

    #[test]
    fn profile_fields_overwrite_everything_but_the_account_type() {
        let user = session_user();
        let update = ProfileUpdate::new(
            "Anna",
            "",
            "Reyes-Cruz",
            "anna@uep.edu",
            "annarc",
            "new-password",
        );

        let patched = apply_profile_fields(&user, &update);
        assert_eq!(patched.fname, "Anna");
        assert_eq!(patched.mname, "");
        assert_eq!(patched.lname, "Reyes-Cruz");
        assert_eq!(patched.email, "anna@uep.edu");
        assert_eq!(patched.username, "annarc");
        // Type is not editable through the profile form
        assert_eq!(patched.kind, UserKind::User);
    }
}
