//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod badge;
pub mod claims;
pub mod items;
pub mod nav;
pub mod toast;
pub mod users;

pub use badge::StatusBadge;
pub use claims::{MyClaimsTable, PendingClaimsTable};
pub use items::{AdminItemTable, ItemGrid};
pub use nav::Nav;
pub use toast::Toast;
pub use users::{PendingAdminTable, UserInfoCards, UserTable};
