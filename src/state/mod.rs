//! State Management
//!
//! Session context, view routing enums, and the wire-level domain models.

pub mod models;
pub mod session;

pub use models::{Claim, Item, User, UserKind};
pub use session::{provide_session_state, SessionState};
