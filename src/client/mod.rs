//! Halo API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub mod decode;
pub mod halo;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use halo::HaloClient;

/// Authentication endpoints (no credential required).
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create a new account via `POST /register`
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;

    /// Exchange credentials for a session via `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}

/// Protected endpoints: every call attaches the current bearer credential.
///
/// Implementations must fail with `ApiError::NotAuthenticated` before any
/// network I/O when no credential is held, and must never clear the
/// session themselves, even on a 401.
#[async_trait]
pub trait ProtectedApi: Send + Sync {
    /// Authenticated GET; the decoded payload has any one-level `data`
    /// envelope already removed
    async fn get(&self, path: &str) -> Result<Value>;

    /// Authenticated POST with an optional JSON body
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value>;

    /// Fetch the dashboard payload
    async fn fetch_dashboard(&self) -> Result<Value> {
        self.get("/dashboard").await
    }
}
