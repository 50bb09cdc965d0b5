//! Typed accessors over a [`KvStore`].
//!
//! Each submodule adds methods to [`PortalStore`] via `impl PortalStore`
//! blocks, one per key family.

mod audit;
mod auth;
mod locations;
mod permissions;
mod quotes;
mod roles;
mod settings;
mod users;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{KvError, KvStore, MemoryKv};

pub use audit::ConsistencyReport;

/// Records found by listing a key family: the identifier as it appears in
/// the key, and the decoded record or its decode error.
pub type Listed<T> = Vec<(String, Result<T, KvError>)>;

/// Typed view of portal state in the key-value store.
#[derive(Clone)]
pub struct PortalStore {
    kv: Arc<dyn KvStore>,
}

impl PortalStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Store over a fresh [`MemoryKv`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKv::new()))
    }

    /// The raw store, for maintenance commands that address keys directly.
    #[must_use]
    pub fn raw(&self) -> &dyn KvStore {
        self.kv.as_ref()
    }

    /// Read and decode a JSON blob.
    ///
    /// Values written by older tooling are sometimes double-encoded (a JSON
    /// string whose content is the JSON blob); those are unwrapped once.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, KvError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(None);
        };
        decode(key, &raw).map(Some)
    }

    pub(crate) async fn put_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), KvError> {
        self.kv.set(key, &encode(key, value)?).await
    }

    pub(crate) async fn put_json_ex<T: Serialize + ?Sized>(
        &self,
        key: &str,
        ttl_secs: u64,
        value: &T,
    ) -> Result<(), KvError> {
        self.kv.setex(key, ttl_secs, &encode(key, value)?).await
    }

    /// Every record under `prefix`, read back by its exact listed key.
    ///
    /// Keys that vanish between listing and reading are skipped. Decode
    /// failures are kept per entry; any other error aborts.
    pub(crate) async fn records_under<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Listed<T>, KvError> {
        let mut records = Vec::new();
        for key in self.kv.keys(&portal_core::keys::pattern(prefix)).await? {
            let Some(id) = portal_core::keys::strip_prefix(&key, prefix) else {
                continue;
            };
            match self.get_json::<T>(&key).await {
                Ok(Some(record)) => records.push((id.to_string(), Ok(record))),
                Ok(None) => {}
                Err(error @ KvError::Decode { .. }) => records.push((id.to_string(), Err(error))),
                Err(error) => return Err(error),
            }
        }
        Ok(records)
    }

    /// Identifiers of every key under `prefix`.
    pub(crate) async fn ids_under(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let keys = self.kv.keys(&portal_core::keys::pattern(prefix)).await?;
        Ok(keys
            .iter()
            .filter_map(|key| portal_core::keys::strip_prefix(key, prefix))
            .map(str::to_string)
            .collect())
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, KvError> {
    match serde_json::from_str::<T>(raw) {
        Ok(value) => Ok(value),
        Err(source) => match serde_json::from_str::<String>(raw) {
            Ok(inner) => serde_json::from_str::<T>(&inner).map_err(|source| {
                KvError::Decode {
                    key: key.to_string(),
                    source,
                }
            }),
            Err(_) => Err(KvError::Decode {
                key: key.to_string(),
                source,
            }),
        },
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, KvError> {
    serde_json::to_string(value).map_err(|source| KvError::Encode {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn decode_plain_json() {
        let value: Value = decode("k", r#"{"a":1}"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn decode_unwraps_double_encoded_json() {
        let value: Vec<u32> = decode("k", r#""[1,2,3]""#).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn decode_error_names_key() {
        let err = decode::<Vec<u32>>("users_data", "not json").unwrap_err();
        assert!(err.to_string().contains("users_data"));
    }

    #[tokio::test]
    async fn ids_under_strips_prefix() {
        let store = PortalStore::in_memory();
        store.raw().set("client:role:a", "basic").await.unwrap();
        store.raw().set("client:role:b", "basic").await.unwrap();
        store.raw().set("client:auth:x@y.co", "{}").await.unwrap();

        let ids = store.ids_under("client:role:").await.unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
