//! Admin-only routes: portal settings and client permission assignment.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use portal_core::entities::{AdminSettings, AdminSettingsInput, PermissionAssignment};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Current settings, or defaults when none have been saved.
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let settings = state.store.admin_settings().await?.unwrap_or_default();
    Ok(Json(json!({ "success": true, "settings": settings })))
}

pub async fn put_settings(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    body: Result<Json<AdminSettingsInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = body?;
    let settings: AdminSettings = input.validate(Some(admin.email.clone()))?;
    state.store.save_admin_settings(&settings).await?;
    tracing::info!(admin = %admin.email, "admin settings updated");
    Ok(Json(json!({
        "success": true,
        "message": "Settings updated",
        "settings": settings,
    })))
}

/// Replace a client's permissions and cache the derived tier as its role.
pub async fn put_client_permissions(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    Path(client_uuid): Path<String>,
    body: Result<Json<PermissionAssignment>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(assignment) = body?;
    let record = assignment.resolve(&client_uuid, Some(admin.email.clone()))?;
    let tier = record.tier();

    state.store.set_permissions(&record).await?;
    state
        .store
        .cache_client_role(&record.client_uuid, tier.as_str())
        .await?;

    tracing::info!(
        admin = %admin.email,
        client_uuid = %record.client_uuid,
        %tier,
        "client permissions assigned"
    );
    Ok(Json(json!({
        "success": true,
        "permissions": record,
        "role": tier,
    })))
}
