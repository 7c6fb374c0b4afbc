//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so callers that opt out of failure
//! absorption can tell a missing hero from a broken backend. All other
//! non-2xx responses land in `HttpError` with the raw status code and body.
//! `code()` gives each variant a stable string for structured logs.

/// Errors returned by `HeroClient` parse methods and `Transport` impls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, bad URL).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::NotFound => "not_found",
            ApiError::HttpError { .. } => "http",
            ApiError::DeserializationError(_) => "deserialization",
            ApiError::SerializationError(_) => "serialization",
        }
    }
}
