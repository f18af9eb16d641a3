//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The hosted model failed: network error, non-2xx status, or an
    /// empty completion.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model answered, but the text was not valid JSON even after
    /// code-fence stripping.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
