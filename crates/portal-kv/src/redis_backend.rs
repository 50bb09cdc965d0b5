//! Native Redis protocol backend.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};

use crate::{KvError, KvStore};

/// Redis client backed by a reconnecting connection manager.
#[derive(Clone)]
pub struct RedisKv {
    conn: ConnectionManager,
}

impl RedisKv {
    /// Open a connection manager for `url` (e.g., `redis://localhost:6379`).
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Redis`] if the URL is invalid or the first
    /// connection cannot be established.
    pub async fn connect(url: &str) -> Result<Self, KvError> {
        let client = Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, KvError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, KvError> {
        let mut conn = self.conn.clone();
        Ok(conn.keys::<_, Vec<String>>(pattern).await?)
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let result = RedisKv::connect("not a redis url").await;
        assert!(matches!(result, Err(KvError::Redis(_))));
    }

    #[tokio::test]
    #[ignore] // requires a local redis on 6379
    async fn live_roundtrip() {
        let kv = RedisKv::connect("redis://127.0.0.1:6379").await.unwrap();
        kv.set("portal:test:key", "value").await.unwrap();
        assert_eq!(kv.get("portal:test:key").await.unwrap().as_deref(), Some("value"));
        assert!(kv.del("portal:test:key").await.unwrap());
    }
}
