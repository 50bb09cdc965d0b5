//! `GET /debug-users`: unauthenticated diagnostics, mounted only when
//! `server.debug_routes` is set. Tokens are masked.

use axum::{Json, extract::State};
use portal_core::validation::mask_secret;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDiagnostics {
    email: String,
    name: Option<String>,
    role: String,
    token_preview: Option<String>,
    has_token: bool,
    has_session_token: bool,
    assigned_client_uuid: Option<String>,
    assignment_status: &'static str,
    has_permissions: bool,
    permission_count: usize,
}

pub async fn debug_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.store.load_users().await?;
    let mut report = Vec::with_capacity(users.len());

    for user in &users {
        let permissions = match user.assigned_client() {
            Some(client) => state.store.get_permissions(client).await?,
            None => None,
        };
        report.push(UserDiagnostics {
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            token_preview: user.token.as_deref().map(mask_secret),
            has_token: user.token.as_deref().is_some_and(|t| !t.is_empty()),
            has_session_token: user.session_token.as_deref().is_some_and(|t| !t.is_empty()),
            assigned_client_uuid: user.assigned_client_uuid.clone(),
            assignment_status: if user.assigned_client().is_some() {
                "assigned"
            } else {
                "unassigned"
            },
            has_permissions: permissions.is_some(),
            permission_count: permissions.map_or(0, |p| p.permissions.len()),
        });
    }

    Ok(Json(json!({
        "success": true,
        "count": report.len(),
        "users": report,
    })))
}
