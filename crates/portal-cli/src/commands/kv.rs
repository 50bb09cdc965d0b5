//! `portalctl kv`: raw key access for inspection and cleanup.

use anyhow::Context;
use portal_kv::KvStore;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::KvCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deletion {
    pub key: String,
    pub existed: bool,
    pub dry_run: bool,
}

pub async fn handle(action: &KvCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kv = ctx.store.raw();
    match action {
        KvCommands::Get { key } => output(&get(kv, key).await?, flags.format),
        KvCommands::Keys { pattern } => output(&kv.keys(pattern).await?, flags.format),
        KvCommands::Del { key, dry_run } => output(&del(kv, key, *dry_run).await?, flags.format),
    }
}

/// A key's value, decoded as JSON when it is JSON.
pub async fn get(kv: &dyn KvStore, key: &str) -> anyhow::Result<Value> {
    let raw = kv
        .get(key)
        .await?
        .with_context(|| format!("key not found: {key}"))?;
    Ok(serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
}

pub async fn del(kv: &dyn KvStore, key: &str, dry_run: bool) -> anyhow::Result<Deletion> {
    let existed = if dry_run {
        kv.get(key).await?.is_some()
    } else {
        let existed = kv.del(key).await?;
        tracing::info!(%key, existed, "key deleted");
        existed
    };
    Ok(Deletion {
        key: key.to_string(),
        existed,
        dry_run,
    })
}
