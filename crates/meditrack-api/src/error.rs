//! API error type.

use meditrack_core::{StorageError, ValidationErrors};
use thiserror::Error;

/// Errors from talking to the MediTrack API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 401. The session has already been cleared when this is returned.
    #[error("Session rejected by server")]
    Unauthorized { message: Option<String> },

    /// HTTP 409, e.g. a patient with this national id already exists.
    #[error("Conflict: {}", .message.as_deref().unwrap_or("resource already exists"))]
    Conflict { message: Option<String> },

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Conflict { .. } => Some(409),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Message sent by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Conflict { message }
            | ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message, else `default`.
    pub fn user_message(&self, default: &str) -> String {
        self.server_message().unwrap_or(default).to_string()
    }
}

/// Pull a human-readable message out of an error body.
///
/// The API has used `msg`, `error` and `message` over time; they are tried
/// in that order.
pub(crate) fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["msg", "error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}
