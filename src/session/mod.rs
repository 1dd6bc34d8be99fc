//! Session state: the pairing of a bearer credential with a user profile.
//!
//! A `Session` exists if and only if a credential is present; the two are
//! persisted and cleared together through a [`SessionStore`], never
//! partially updated.

use serde::{Deserialize, Serialize};

use crate::client::models::User;

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

/// The persisted client-side session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the backend on login
    pub token: String,

    /// Profile snapshot of the authenticated user
    pub user: User,
}
