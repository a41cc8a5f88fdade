//! Error types for codectx-ir
//!
//! Provides unified error handling across the crate. Recoverable conditions
//! (missing import target, unreconstructable expression, non-literal return
//! value) are modeled as values, not errors; this enum covers the genuinely
//! exceptional paths.

use thiserror::Error;

/// Main error type for codectx-ir operations
#[derive(Debug, Error)]
pub enum CodectxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (grammar could not be loaded)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodectxError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CodectxError::Parse(msg.into())
    }
}

/// Result type alias for codectx operations
pub type Result<T> = std::result::Result<T, CodectxError>;
