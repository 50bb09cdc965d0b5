//! `portalctl users`: edits to the `users_data` array.

use anyhow::{Context, bail};
use portal_core::entities::PortalUser;
use portal_core::ids::generate_token;
use portal_core::validation::{is_valid_uuid, normalize_client_uuid, normalize_email};
use portal_kv::PortalStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct UserList {
    pub count: usize,
    pub users: Vec<PortalUser>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReset {
    pub email: String,
    pub dry_run: bool,
    /// The new token; absent on a dry run.
    pub token: Option<String>,
    pub session_token_updated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub email: String,
    pub dry_run: bool,
    pub assigned_client_uuid: Option<String>,
    pub has_permissions: bool,
}

pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = &ctx.store;
    match action {
        UserCommands::List => output(&list(store).await?, flags.format),
        UserCommands::Show { email } => output(&show(store, email).await?, flags.format),
        UserCommands::ResetToken { email, dry_run } => {
            output(&reset_token(store, email, *dry_run).await?, flags.format)
        }
        UserCommands::Assign {
            email,
            client_uuid,
            dry_run,
        } => output(&assign(store, email, client_uuid, *dry_run).await?, flags.format),
    }
}

pub async fn list(store: &PortalStore) -> anyhow::Result<UserList> {
    let users: Vec<PortalUser> = store
        .load_users()
        .await?
        .iter()
        .map(PortalUser::masked)
        .collect();
    Ok(UserList {
        count: users.len(),
        users,
    })
}

pub async fn show(store: &PortalStore, email: &str) -> anyhow::Result<PortalUser> {
    store
        .find_user_by_email(email)
        .await?
        .map(|user| user.masked())
        .with_context(|| format!("no user with email {email}"))
}

/// Replace the user's `token` (and `sessionToken`, when set) with a fresh one.
pub async fn reset_token(store: &PortalStore, email: &str, dry_run: bool) -> anyhow::Result<TokenReset> {
    if dry_run {
        let user = store
            .find_user_by_email(email)
            .await?
            .with_context(|| format!("no user with email {email}"))?;
        return Ok(TokenReset {
            email: normalize_email(email),
            dry_run,
            token: None,
            session_token_updated: user.session_token.is_some(),
        });
    }

    let token = generate_token()?;
    let mut session_token_updated = false;
    store
        .update_user(email, |user| {
            user.token = Some(token.clone());
            if user.session_token.is_some() {
                user.session_token = Some(token.clone());
                session_token_updated = true;
            }
        })
        .await?
        .with_context(|| format!("no user with email {email}"))?;

    tracing::info!(%email, "token reset");
    Ok(TokenReset {
        email: normalize_email(email),
        dry_run,
        token: Some(token),
        session_token_updated,
    })
}

/// Set `assignedClientUuid`, or clear it when `client_uuid` is `none`.
pub async fn assign(
    store: &PortalStore,
    email: &str,
    client_uuid: &str,
    dry_run: bool,
) -> anyhow::Result<Assignment> {
    let client_uuid = client_uuid.trim();
    let target = if client_uuid.eq_ignore_ascii_case("none") {
        None
    } else if is_valid_uuid(client_uuid) {
        Some(normalize_client_uuid(client_uuid))
    } else {
        bail!("{client_uuid} is not a client UUID (use `none` to clear)");
    };

    let found = if dry_run {
        store.find_user_by_email(email).await?
    } else {
        store
            .update_user(email, |user| user.assigned_client_uuid.clone_from(&target))
            .await?
    };
    let user = found.with_context(|| format!("no user with email {email}"))?;

    let has_permissions = match &target {
        Some(uuid) => store.get_permissions(uuid).await?.is_some(),
        None => false,
    };
    if target.is_some() && !has_permissions {
        tracing::warn!(%email, "assigned client has no permissions entry");
    }

    Ok(Assignment {
        email: user.email,
        dry_run,
        assigned_client_uuid: target,
        has_permissions,
    })
}
