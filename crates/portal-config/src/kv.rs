//! Key-value store configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout for the REST protocol, in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Which store backend to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KvBackendKind {
    /// REST if a REST URL/token pair is set, else Redis if a Redis URL is set.
    #[default]
    Auto,
    /// Hosted REST protocol (Upstash-compatible).
    Rest,
    /// Native Redis protocol.
    Redis,
    /// Process-local map. Data is lost on exit.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KvConfig {
    #[serde(default)]
    pub backend: KvBackendKind,

    /// REST endpoint (e.g., `https://eu1-example.upstash.io`).
    #[serde(default)]
    pub rest_url: String,

    /// REST bearer token.
    #[serde(default)]
    pub rest_token: String,

    /// Native Redis URL (e.g., `redis://localhost:6379`).
    #[serde(default)]
    pub redis_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            backend: KvBackendKind::default(),
            rest_url: String::new(),
            rest_token: String::new(),
            redis_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl KvConfig {
    #[must_use]
    pub fn has_rest(&self) -> bool {
        !self.rest_url.is_empty() && !self.rest_token.is_empty()
    }

    #[must_use]
    pub fn has_redis(&self) -> bool {
        !self.redis_url.is_empty()
    }

    /// Resolve [`KvBackendKind::Auto`] to a concrete backend.
    ///
    /// Returns `None` when the chosen backend lacks its connection settings.
    #[must_use]
    pub fn resolved_backend(&self) -> Option<KvBackendKind> {
        match self.backend {
            KvBackendKind::Auto if self.has_rest() => Some(KvBackendKind::Rest),
            KvBackendKind::Auto if self.has_redis() => Some(KvBackendKind::Redis),
            KvBackendKind::Auto => None,
            KvBackendKind::Rest if self.has_rest() => Some(KvBackendKind::Rest),
            KvBackendKind::Redis if self.has_redis() => Some(KvBackendKind::Redis),
            KvBackendKind::Memory => Some(KvBackendKind::Memory),
            KvBackendKind::Rest | KvBackendKind::Redis => None,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.resolved_backend().is_some()
    }
}
