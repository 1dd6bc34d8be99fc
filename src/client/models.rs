//! Wire types for the Halo API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by the backend.
///
/// Only `id` and `name` are guaranteed; the remaining fields default when
/// the backend omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Assigned roles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// When the email address was verified, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<DateTime<Utc>>,
}

/// Registration request body for `POST /register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Plaintext password, sent over TLS only
    pub password: String,
}

/// Response body of `POST /register`.
///
/// Some backend versions include a token and user here; haloctl discards
/// them and treats registration and login as distinct steps.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation from the backend
    #[serde(default)]
    pub message: Option<String>,
}

/// Login request body for `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Plaintext password, sent over TLS only
    pub password: String,
}

/// Response body of `POST /login`.
///
/// Login succeeded only when the HTTP status was 2xx *and*
/// `status == "success"`; a 2xx with any other `status` is an
/// application-level failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Application-level outcome indicator
    #[serde(default)]
    pub status: Option<String>,

    /// Human-readable message, present on failures
    #[serde(default)]
    pub message: Option<String>,

    /// Bearer credential, present on success
    #[serde(default)]
    pub authorisation: Option<Authorisation>,

    /// Authenticated user profile, present on success
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// Application-level success check
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Credential envelope inside the login response
#[derive(Debug, Clone, Deserialize)]
pub struct Authorisation {
    /// Opaque bearer token
    pub token: String,
}
