//! Hosted REST protocol backend.
//!
//! Each command is a `POST` to the endpoint root with the command as a JSON
//! array (`["SET", "key", "value"]`) and a bearer token. Replies are
//! `{"result": ...}` on success or `{"error": "..."}` on failure.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{KvError, KvStore};

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<String>,
}

/// REST client for an Upstash-compatible endpoint.
pub struct RestKv {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl RestKv {
    /// Create a client for `url` authenticated with `token`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(url: &str, token: &str, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("portal-kv/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn command(&self, args: &[&str]) -> Result<Value, KvError> {
        let name = args.first().copied().unwrap_or_default();
        tracing::debug!(command = name, "kv rest command");
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&args)
            .send()
            .await?;
        read_reply(resp).await
    }
}

/// Turn an HTTP response into the command result.
async fn read_reply(resp: reqwest::Response) -> Result<Value, KvError> {
    let status = resp.status();
    if status == 401 || status == 403 {
        return Err(KvError::Unauthorized {
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    let reply = serde_json::from_str::<Reply>(&body);
    if !status.is_success() {
        return match reply {
            Ok(Reply {
                error: Some(message),
                ..
            }) => Err(KvError::Command(message)),
            _ => Err(KvError::Api {
                status: status.as_u16(),
                message: body,
            }),
        };
    }

    match reply {
        Ok(Reply {
            error: Some(message),
            ..
        }) => Err(KvError::Command(message)),
        Ok(reply) => Ok(reply.result),
        Err(e) => Err(KvError::UnexpectedReply(e.to_string())),
    }
}

fn as_optional_string(value: Value) -> Result<Option<String>, KvError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(KvError::UnexpectedReply(format!("expected string, got {other}"))),
    }
}

#[async_trait]
impl KvStore for RestKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        as_optional_string(self.command(&["GET", key]).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.command(&["SET", key, value]).await.map(drop)
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<(), KvError> {
        let ttl = ttl_secs.to_string();
        self.command(&["SETEX", key, &ttl, value]).await.map(drop)
    }

    async fn del(&self, key: &str) -> Result<bool, KvError> {
        let removed = self.command(&["DEL", key]).await?;
        Ok(removed.as_u64().unwrap_or(0) > 0)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, KvError> {
        match self.command(&["KEYS", pattern]).await? {
            Value::Null => Ok(Vec::new()),
            value => serde_json::from_value(value)
                .map_err(|e| KvError::UnexpectedReply(e.to_string())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "rest"
    }
}
