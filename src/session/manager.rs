//! Session lifecycle: registration, login, reads, logout.
//!
//! The manager owns the client's notion of "who is logged in". It is the
//! only writer of the session store; the authenticated request client
//! only ever reads from it.

use std::sync::Arc;

use log::debug;

use super::{Session, SessionStore};
use crate::client::AuthApi;
use crate::client::models::{LoginRequest, RegisterRequest, User};
use crate::error::{ApiError, Result};

/// Fallback message when a failed login carries no backend message.
const GENERIC_LOGIN_FAILURE: &str = "Invalid email or password";

/// Fallback message when a successful registration carries no message.
const GENERIC_REGISTER_SUCCESS: &str = "Account created. You can now log in.";

pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Register a new account.
    ///
    /// Registration never establishes a session: even when the backend
    /// returns a token alongside the confirmation, it is discarded and the
    /// caller logs in as a separate step. Returns the backend's message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String> {
        let response = self.api.register(request).await?;
        Ok(response
            .message
            .unwrap_or_else(|| GENERIC_REGISTER_SUCCESS.to_string()))
    }

    /// Log in and persist the resulting session.
    ///
    /// Success requires the application-level `status == "success"` check
    /// on top of the transport-level one; a 2xx body that fails it leaves
    /// the store untouched and surfaces the backend's message. On success
    /// the new session replaces any prior one in a single store write.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;

        if !response.is_success() {
            let message = response
                .message
                .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_string());
            return Err(ApiError::AuthenticationFailed(message).into());
        }

        let token = response
            .authorisation
            .map(|a| a.token)
            .ok_or_else(|| ApiError::InvalidResponse("login response has no token".to_string()))?;
        let user = response
            .user
            .ok_or_else(|| ApiError::InvalidResponse("login response has no user".to_string()))?;

        let session = Session { token, user };
        self.store.save(&session)?;
        debug!("session established for user {}", session.user.id);

        Ok(session)
    }

    /// Read the persisted user profile. Never touches the network.
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(self.store.load()?.map(|s| s.user))
    }

    /// Read the persisted bearer credential. Never touches the network.
    pub fn current_credential(&self) -> Result<Option<String>> {
        Ok(self.store.load()?.map(|s| s.token))
    }

    /// Drop the session. Idempotent: with no session this is a no-op.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        debug!("session cleared");
        Ok(())
    }
}
