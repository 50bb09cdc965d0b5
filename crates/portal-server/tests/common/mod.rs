#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portal_kv::{KvError, KvStore, MemoryKv, PortalStore};
use portal_server::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "adm-7f3c9a1e5b";
pub const CLIENT_TOKEN: &str = "cli-2b8d4f6a0c";
pub const CLIENT_SESSION: &str = "sess-91ae77c3d0";
pub const UNASSIGNED_TOKEN: &str = "una-5c1e3a9b7d";
pub const CLIENT_UUID: &str = "5f3a8c2e-1b4d-4e6f-9a7c-2d8e0f1b3c5a";
pub const OTHER_CLIENT_UUID: &str = "0e9d8c7b-6a5f-4e3d-8c2b-1a0f9e8d7c6b";

pub fn users() -> Value {
    json!([
        {"id": 1, "email": "admin@acme.com", "name": "Ada Admin", "token": ADMIN_TOKEN, "role": " Admin "},
        {"id": 2, "email": "jo@client.com", "name": "Jo Client", "token": CLIENT_TOKEN,
         "sessionToken": CLIENT_SESSION, "role": "client", "assignedClientUuid": CLIENT_UUID},
        {"id": 3, "email": "sam@client.com", "token": UNASSIGNED_TOKEN, "role": "client",
         "assignedClientUuid": "none"},
        {"id": 4, "email": "blank@client.com", "token": "blank-token-1", "role": "client",
         "assignedClientUuid": "   "},
        {"id": 5, "email": "absent@client.com", "token": "absent-token-1", "role": "client"},
        {"id": 6, "email": "orphan@client.com", "token": "orphan-token-1", "role": "client",
         "assignedClientUuid": OTHER_CLIENT_UUID}
    ])
}

pub async fn seeded_kv() -> Arc<MemoryKv> {
    let kv = Arc::new(MemoryKv::new());
    kv.set("users_data", &users().to_string()).await.unwrap();
    kv.set(
        &format!("client:permissions:{CLIENT_UUID}"),
        &json!({
            "clientUuid": CLIENT_UUID,
            "permissions": ["view_jobs", "view_quotes", "view_invoices"],
            "template": "custom"
        })
        .to_string(),
    )
    .await
    .unwrap();
    kv
}

pub async fn seeded_store() -> PortalStore {
    PortalStore::new(seeded_kv().await)
}

pub async fn app() -> (Router, PortalStore) {
    let store = seeded_store().await;
    (router(AppState::new(store.clone())), store)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_json(uri: &str, token: &str, body: &Value) -> Request<Body> {
    put_raw(uri, token, &body.to_string())
}

pub fn put_raw(uri: &str, token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// A store whose every command fails.
pub struct BrokenKv;

#[async_trait]
impl KvStore for BrokenKv {
    async fn get(&self, _key: &str) -> Result<Option<String>, KvError> {
        Err(KvError::Command("ERR connection reset".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), KvError> {
        Err(KvError::Command("ERR connection reset".into()))
    }

    async fn setex(&self, _key: &str, _ttl: u64, _value: &str) -> Result<(), KvError> {
        Err(KvError::Command("ERR connection reset".into()))
    }

    async fn del(&self, _key: &str) -> Result<bool, KvError> {
        Err(KvError::Command("ERR connection reset".into()))
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>, KvError> {
        Err(KvError::Command("ERR connection reset".into()))
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

pub fn broken_app() -> Router {
    router(AppState::new(PortalStore::new(Arc::new(BrokenKv))))
}
