//! Verification client error types.
//!
//! ## Security Note
//!
//! Error messages must not leak sensitive information like the app
//! secret or the password under check.

use thiserror::Error;

/// Errors raised by the verification client.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Invalid client configuration.
    #[error("verification client configuration error: {0}")]
    Configuration(String),

    /// The API endpoint URL could not be parsed.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP transport failed (connect, timeout, non-success status).
    #[error("verification transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered but the body was not decodable.
    #[error("verification protocol error: {0}")]
    Protocol(String),

    /// The service reported an application-level error.
    #[error("verification service error: {0}")]
    Service(String),
}

impl VerifyError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Checks if this error originated in the transport layer.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;
