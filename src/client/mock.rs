//! Mock Halo API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::{AuthApi, ProtectedApi};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses with the setters, then assert on call counts.
pub struct MockHaloClient {
    /// Response to return from login
    login_response: Arc<Mutex<Option<LoginResponse>>>,
    /// Response to return from register
    register_response: Arc<Mutex<Option<RegisterResponse>>>,
    /// Payload to return from protected calls
    protected_payload: Arc<Mutex<Value>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockHaloClient {
    fn default() -> Self {
        Self {
            login_response: Arc::new(Mutex::new(None)),
            register_response: Arc::new(Mutex::new(None)),
            protected_payload: Arc::new(Mutex::new(Value::Null)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub get: usize,
    pub post: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.register + self.login + self.get + self.post
    }
}

impl MockHaloClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response to return from login.
    pub async fn set_login_response(&self, response: LoginResponse) {
        *self.login_response.lock().await = Some(response);
    }

    /// Configure the response to return from register.
    pub async fn set_register_response(&self, response: RegisterResponse) {
        *self.register_response.lock().await = Some(response);
    }

    /// Configure the payload to return from protected calls.
    #[allow(dead_code)]
    pub async fn set_protected_payload(&self, payload: Value) {
        *self.protected_payload.lock().await = payload;
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    #[allow(dead_code)]
    pub async fn set_error(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockHaloClient {
    async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.register += 1;
        drop(counts);

        let response = self.register_response.lock().await;
        Ok(response
            .clone()
            .unwrap_or(RegisterResponse { message: None }))
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.login += 1;
        drop(counts);

        let response = self.login_response.lock().await;
        response.clone().ok_or_else(|| {
            ApiError::InvalidResponse("mock login response not configured".to_string()).into()
        })
    }
}

#[async_trait]
impl ProtectedApi for MockHaloClient {
    async fn get(&self, _path: &str) -> Result<Value> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.get += 1;
        drop(counts);

        Ok(self.protected_payload.lock().await.clone())
    }

    async fn post(&self, _path: &str, _body: Option<&Value>) -> Result<Value> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.post += 1;
        drop(counts);

        Ok(self.protected_payload.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_client_login_unconfigured_is_error() {
        let mock = MockHaloClient::new();
        let result = mock
            .login(&LoginRequest {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockHaloClient::new();
        mock.set_error(ApiError::NotAuthenticated).await;

        let result = mock.get("/dashboard").await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.get("/dashboard").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockHaloClient::new();
        mock.set_protected_payload(json!({"visits": 1})).await;

        mock.get("/dashboard").await.unwrap();
        mock.get("/dashboard").await.unwrap();
        mock.post("/widgets", None).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get, 2);
        assert_eq!(counts.post, 1);
        assert_eq!(counts.login, 0);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_protected_payload() {
        let mock = MockHaloClient::new();
        mock.set_protected_payload(json!({"visits": 42})).await;

        let payload = mock.fetch_dashboard().await.unwrap();
        assert_eq!(payload, json!({"visits": 42}));
    }
}
