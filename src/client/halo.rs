//! Halo API client implementation

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::decode;
use super::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::{AuthApi, ProtectedApi};
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Halo API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HaloClient {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl HaloClient {
    /// Create a new client against the given base URL.
    ///
    /// The credential for protected calls is read from `store` on every
    /// request; the client itself never caches or mutates it.
    pub fn new(base_url: String, store: Arc<dyn SessionStore>) -> Result<Self> {
        // TODO: add a request timeout; the builder currently inherits
        // reqwest's default of none, matching the backend's slower
        // dashboard aggregation endpoints.
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the current bearer token, failing before any network I/O
    /// when no session is persisted.
    fn bearer_token(&self) -> Result<String> {
        match self.store.load()? {
            Some(session) => Ok(session.token),
            None => Err(ApiError::NotAuthenticated.into()),
        }
    }

    /// Issue an unauthenticated POST and parse the 2xx body as `T`.
    ///
    /// 4xx responses become `ApiError::Validation` carrying the backend's
    /// message; everything else non-2xx becomes a transport error.
    async fn post_auth_endpoint<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let url = self.url(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        debug!("POST {path} -> {status}");

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("failed to parse {path} response: {e}")).into()
            });
        }

        if status.is_client_error() {
            let message = decode::extract_message(&text)
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            return Err(ApiError::Validation(message).into());
        }

        Err(ApiError::from_status(status.as_u16(), &text).into())
    }

    /// Interpret a protected-endpoint response under the uniform
    /// decoding policy.
    async fn decode_protected(response: reqwest::Response, path: &str) -> Result<Value> {
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        debug!("{path} -> {status}");

        if status.is_success() {
            // Empty or unparseable 2xx bodies decode to Null, not an error
            return Ok(decode::decode_success_body(&text));
        }

        if status == StatusCode::UNAUTHORIZED {
            debug!("credential rejected by {path}; session left intact");
        }

        Err(ApiError::from_status(status.as_u16(), &text).into())
    }
}

#[async_trait]
impl AuthApi for HaloClient {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.post_auth_endpoint("/register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post_auth_endpoint("/login", request).await
    }
}

#[async_trait]
impl ProtectedApi for HaloClient {
    async fn get(&self, path: &str) -> Result<Value> {
        let token = self.bearer_token()?;

        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode_protected(response, path).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.bearer_token()?;

        let mut request = self.http.post(self.url(path)).bearer_auth(&token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        Self::decode_protected(response, path).await
    }
}
