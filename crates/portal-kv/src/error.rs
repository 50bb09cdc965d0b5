//! Key-value store error types.

use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Debug, Error)]
pub enum KvError {
    /// HTTP transport error talking to the REST endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The REST endpoint rejected the credentials.
    #[error("store rejected credentials ({status})")]
    Unauthorized {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The REST endpoint returned a non-success status without a command error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The store executed the command and reported an error.
    #[error("command failed: {0}")]
    Command(String),

    /// The store reply did not have the expected shape.
    #[error("unexpected reply: {0}")]
    UnexpectedReply(String),

    /// Native Redis protocol error.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored blob could not be decoded.
    #[error("cannot decode value at '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("cannot encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No backend could be built from configuration.
    #[error("store not configured: {0}")]
    NotConfigured(String),
}
