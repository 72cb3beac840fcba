use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status strings returned by the generative-language API in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    FailedPrecondition,
    PermissionDenied,
    Unauthenticated,
    NotFound,
    ResourceExhausted,
    Internal,
    Unavailable,
    DeadlineExceeded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "unknown_status")]
    pub status: ErrorCode,
}

fn unknown_status() -> ErrorCode {
    ErrorCode::Unknown
}

/// Envelope the API wraps around [`ApiError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

impl ApiError {
    pub fn new(code: u16, status: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }

    /// Best-effort decode of an error body; plain-text bodies become `Unknown`.
    pub fn from_body(code: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => Self::new(code, ErrorCode::Unknown, body.trim()),
        }
    }
}

#[derive(Debug, Error)]
#[error("{status:?} ({code}): {message}")]
pub struct ApiException {
    pub code: u16,
    pub status: ErrorCode,
    pub message: String,
}

impl From<ApiError> for ApiException {
    fn from(value: ApiError) -> Self {
        Self {
            code: value.code,
            status: value.status,
            message: value.message,
        }
    }
}
