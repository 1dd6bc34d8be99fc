//! Error types for the haloctl CLI

use thiserror::Error;

/// Result type alias for haloctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors.
///
/// Every call to the backend resolves to either a payload or one of these
/// variants; no transport or parse fault escapes as a panic.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A protected call was attempted with no persisted session.
    /// Raised before any network I/O happens.
    #[error("Not logged in. Run `haloctl login` to authenticate.")]
    NotAuthenticated,

    /// Login reached the backend but failed the application-level
    /// success check (HTTP 2xx with `status != "success"`).
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The backend rejected registration or login input (4xx).
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP status on a protected call.
    #[error("Request failed with status {status}: {message}")]
    Transport { status: u16, message: String },

    /// Connection-level failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the backend's
    /// `message` field over a generic status line.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = crate::client::decode::extract_message(body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Transport { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
