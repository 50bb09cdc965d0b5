//! Cross-cutting error types for the portal.
//!
//! Storage, SDK, and HTTP errors live in their own crates. This enum covers
//! failures that arise from the domain rules themselves.

use thiserror::Error;

/// Errors raised by domain rules shared across portal crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (missing field, bad email, bad UUID).
    #[error("{0}")]
    Validation(String),

    /// Random token generation failed.
    #[error("token generation failed: {0}")]
    Entropy(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
