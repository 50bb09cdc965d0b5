//! Process-local backend with lazy expiry.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use globset::{GlobBuilder, GlobMatcher};

use crate::{KvError, KvStore};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// In-memory store. Expired entries are dropped when next touched.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: DashMap<String, Entry>,
}

impl MemoryKv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of a key, if it has an expiry and is still live.
    #[must_use]
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|e| e.is_live(now))
            .and_then(|e| e.expires_at)
            .map(|at| at.saturating_duration_since(now))
    }

    fn insert(&self, key: &str, value: &str, expires_at: Option<Instant>) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let now = Instant::now();
        let entry = self.entries.get(key).map(|e| e.clone());
        match entry {
            Some(e) if e.is_live(now) => Ok(Some(e.value)),
            Some(_) => {
                self.entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.insert(key, value, None);
        Ok(())
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<(), KvError> {
        if ttl_secs == 0 {
            return Err(KvError::Command("invalid expire time in 'setex' command".into()));
        }
        let expires_at = Instant::now() + Duration::from_secs(ttl_secs);
        self.insert(key, value, Some(expires_at));
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, KvError> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| entry.is_live(now)))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, KvError> {
        let matcher = compile_pattern(pattern)?;
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.is_live(now));
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|e| matcher.is_match(e.key()))
            .map(|e| e.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Compile a Redis `KEYS` pattern: `*`, `?`, `[...]` classes, and `\`
/// escapes. `*` crosses `:` and `/`.
fn compile_pattern(pattern: &str) -> Result<GlobMatcher, KvError> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| KvError::Command(format!("invalid key pattern: {e}")))
}
