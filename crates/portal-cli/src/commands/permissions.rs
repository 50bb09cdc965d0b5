//! `portalctl permissions`: read, write, backfill, and reclassify
//! `client:permissions:<uuid>` entries.

use anyhow::Context;
use portal_core::entities::{ClientPermissions, PermissionAssignment};
use portal_core::enums::{ClientTier, PermissionTemplate};
use portal_core::validation::normalize_client_uuid;
use portal_kv::PortalStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PermissionCommands;
use crate::context::AppContext;
use crate::output::output;

const ASSIGNED_BY: &str = "portalctl";

#[derive(Debug, Serialize)]
pub struct PermissionView {
    /// Set only by `permissions set`: whether the write was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(flatten)]
    pub record: ClientPermissions,
    pub tier: ClientTier,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillRow {
    pub email: String,
    pub client_uuid: String,
    pub action: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReport {
    pub dry_run: bool,
    pub template: PermissionTemplate,
    pub created: usize,
    pub rows: Vec<BackfillRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRow {
    pub client_uuid: String,
    pub permission_count: usize,
    pub previous: String,
    pub template: PermissionTemplate,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyReport {
    pub dry_run: bool,
    pub changed: usize,
    pub rows: Vec<ClassifyRow>,
}

pub async fn handle(
    action: &PermissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = &ctx.store;
    match action {
        PermissionCommands::Get { client_uuid } => output(&get(store, client_uuid).await?, flags.format),
        PermissionCommands::Set {
            client_uuid,
            template,
            permission,
            dry_run,
        } => {
            let assignment = PermissionAssignment {
                template: template.clone(),
                permissions: (!permission.is_empty()).then(|| permission.clone()),
            };
            output(&set(store, client_uuid, assignment, *dry_run).await?, flags.format)
        }
        PermissionCommands::Backfill { template, dry_run } => {
            let template: PermissionTemplate = template.parse()?;
            output(&backfill(store, template, *dry_run).await?, flags.format)
        }
        PermissionCommands::Classify { dry_run } => {
            output(&classify(store, *dry_run).await?, flags.format)
        }
    }
}

pub async fn get(store: &PortalStore, client_uuid: &str) -> anyhow::Result<PermissionView> {
    let record = store
        .get_permissions(client_uuid.trim())
        .await?
        .with_context(|| format!("no permissions for client {client_uuid}"))?;
    let tier = record.tier();
    Ok(PermissionView {
        dry_run: None,
        record,
        tier,
    })
}

/// Write a permission set and cache the derived tier as the client's role.
pub async fn set(
    store: &PortalStore,
    client_uuid: &str,
    assignment: PermissionAssignment,
    dry_run: bool,
) -> anyhow::Result<PermissionView> {
    let record = assignment.resolve(client_uuid, Some(ASSIGNED_BY.to_string()))?;
    let tier = record.tier();
    if !dry_run {
        store.set_permissions(&record).await?;
        store
            .cache_client_role(&record.client_uuid, tier.as_str())
            .await?;
    }
    Ok(PermissionView {
        dry_run: Some(dry_run),
        record,
        tier,
    })
}

/// Give `template` to every client that has a login but no permission
/// entry. Existing entries are never touched. Logins are read by their
/// exact key, so mappings under a mixed-case email are included.
pub async fn backfill(
    store: &PortalStore,
    template: PermissionTemplate,
    dry_run: bool,
) -> anyhow::Result<BackfillReport> {
    if template == PermissionTemplate::Custom {
        anyhow::bail!("backfill needs a named template, not custom");
    }

    let mut rows = Vec::new();
    let mut done = std::collections::HashSet::new();
    for (email, auth) in store.client_auth_records().await? {
        let auth = match auth {
            Ok(auth) => auth,
            Err(error) => {
                tracing::warn!(%email, %error, "skipping unreadable client auth record");
                continue;
            }
        };
        let client_uuid = normalize_client_uuid(&auth.client_uuid);
        if client_uuid.is_empty() {
            continue;
        }

        let action = if done.contains(&client_uuid) {
            "shared"
        } else if store.get_permissions(&client_uuid).await?.is_some() {
            "exists"
        } else if dry_run {
            done.insert(client_uuid.clone());
            "would_create"
        } else {
            let record =
                ClientPermissions::from_template(&client_uuid, template, Some(ASSIGNED_BY.into()));
            store.set_permissions(&record).await?;
            done.insert(client_uuid.clone());
            "created"
        };
        rows.push(BackfillRow {
            email,
            client_uuid,
            action,
        });
    }

    Ok(BackfillReport {
        dry_run,
        template,
        created: done.len(),
        rows,
    })
}

/// Re-derive `template` from each permission set and cache the tier as the
/// client's role. Permission lists are left as they are. Entries under a
/// key that is not lowercase are skipped; `audit` lists them.
pub async fn classify(store: &PortalStore, dry_run: bool) -> anyhow::Result<ClassifyReport> {
    let mut rows = Vec::new();
    for (client_uuid, record) in store.permission_records().await? {
        let mut record = match record {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(%client_uuid, %error, "skipping unreadable permissions record");
                continue;
            }
        };
        if normalize_client_uuid(&client_uuid) != client_uuid {
            tracing::warn!(%client_uuid, "skipping permissions stored under a non-normalized key");
            continue;
        }

        let tier = record.tier();
        let template = PermissionTemplate::from(tier);
        let previous = record.template.clone();
        let changed = previous != template.as_str();

        if !dry_run {
            if changed {
                record.template = template.as_str().to_string();
                record.client_uuid.clone_from(&client_uuid);
                store.set_permissions(&record).await?;
            }
            store.cache_client_role(&client_uuid, tier.as_str()).await?;
        }

        rows.push(ClassifyRow {
            client_uuid,
            permission_count: record.permissions.len(),
            previous,
            template,
            changed,
        });
    }

    Ok(ClassifyReport {
        dry_run,
        changed: rows.iter().filter(|row| row.changed).count(),
        rows,
    })
}
