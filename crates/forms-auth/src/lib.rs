//! # forms-auth
//!
//! Session identity for Forms.
//!
//! Credential checking lives outside this crate. What remains is the shared
//! map from session id to signed-in user, read by every request and written
//! on login and logout. [`SessionStore`] keeps the forward map and the
//! per-user reverse index under a single lock.

pub mod error;
pub mod session;

pub use error::AuthError;
pub use session::{ANONYMOUS_USER_ID, SessionStore, SessionUser};
