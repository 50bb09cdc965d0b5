//! ServiceM8 client error types.

use thiserror::Error;

/// Errors that can occur when calling the ServiceM8 API.
#[derive(Debug, Error)]
pub enum ServiceM8Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected (401 or 403).
    #[error("ServiceM8 rejected the credentials ({status})")]
    Unauthorized {
        /// HTTP status code returned by ServiceM8.
        status: u16,
    },

    /// The addressed record or endpoint does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// Request path that returned 404.
        path: String,
    },

    /// ServiceM8 returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// A `{name}` placeholder in the path template had no value.
    #[error("missing path parameter `{name}` for {template}")]
    MissingPathParam {
        name: String,
        template: &'static str,
    },

    /// The response body or a header could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// No credentials (or no OAuth app) configured.
    #[error("ServiceM8 is not configured: {0}")]
    NotConfigured(&'static str),
}
