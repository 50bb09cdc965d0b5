//! # portal-kv
//!
//! Key-value store access for portal state.
//!
//! The portal keeps everything as JSON blobs under flat string keys and only
//! ever needs five commands: `GET`, `SET`, `SETEX`, `DEL`, and `KEYS`. The
//! [`KvStore`] trait captures exactly that surface, with three backends:
//! - [`RestKv`]: hosted REST protocol (Upstash-compatible) over HTTPS
//! - [`RedisKv`]: native Redis protocol via a connection manager
//! - [`MemoryKv`]: process-local map with lazy expiry, for tests and local runs
//!
//! [`PortalStore`] layers typed, per-feature accessors on top.
//!
//! Every write is an independent round trip. There is no optimistic
//! concurrency control: two writers doing read-modify-write on the same key
//! can lose an update.

mod error;
mod memory;
mod redis_backend;
mod rest;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use portal_config::{KvBackendKind, KvConfig};

pub use error::KvError;
pub use memory::MemoryKv;
pub use redis_backend::RedisKv;
pub use rest::RestKv;
pub use store::{Listed, PortalStore};

/// The five store commands the portal relies on.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a key. Missing (or expired) keys are `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Write a key with no expiry, clearing any previous expiry.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Write a key that expires after `ttl_secs` seconds.
    async fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<(), KvError>;

    /// Delete a key. Returns whether it existed.
    async fn del(&self, key: &str) -> Result<bool, KvError>;

    /// List keys matching a glob pattern (`*` and `?` wildcards).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, KvError>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}

/// Build the backend selected by configuration.
///
/// # Errors
///
/// Returns [`KvError::NotConfigured`] when the selected backend lacks its
/// connection settings, or a connection error for the Redis backend.
pub async fn connect(config: &KvConfig) -> Result<Arc<dyn KvStore>, KvError> {
    let backend = config.resolved_backend().ok_or_else(|| {
        KvError::NotConfigured(
            "set kv.rest_url + kv.rest_token, kv.redis_url, or kv.backend = \"memory\"".into(),
        )
    })?;

    let store: Arc<dyn KvStore> = match backend {
        KvBackendKind::Rest => Arc::new(RestKv::new(
            &config.rest_url,
            &config.rest_token,
            std::time::Duration::from_secs(config.timeout_secs),
        )),
        KvBackendKind::Redis => Arc::new(RedisKv::connect(&config.redis_url).await?),
        KvBackendKind::Memory => Arc::new(MemoryKv::new()),
        KvBackendKind::Auto => {
            return Err(KvError::NotConfigured("backend did not resolve".into()));
        }
    };

    tracing::info!(backend = store.backend_name(), "key-value store ready");
    Ok(store)
}
