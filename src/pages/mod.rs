//! Pages
//!
//! Top-level section components, one per view.

pub mod admin;
pub mod auth;
pub mod user;

pub use admin::AdminDashboard;
pub use auth::{LoginPage, SignupPage};
pub use user::UserDashboard;
