//! Node error types.
//!
//! Only construction can fail; the per-request decision path absorbs
//! every error into an outcome.

use cv_client::VerifyError;
use thiserror::Error;

/// Errors raised while constructing the node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A required configuration value is missing.
    #[error("node configuration error: {0}")]
    Configuration(String),

    /// The verification client could not be constructed.
    #[error("node initialization failed: {0}")]
    Initialization(#[from] VerifyError),
}

impl NodeError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type for node construction.
pub type NodeResult<T> = Result<T, NodeError>;
