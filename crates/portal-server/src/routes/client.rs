//! Routes for users with an assigned client.

use axum::{Extension, Json, extract::State};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::middleware::AssignedClient;
use crate::state::AppState;

/// Confirm the caller's client has a permissions entry.
pub async fn validate_client_assignment(
    State(state): State<AppState>,
    Extension(AssignedClient(client_uuid)): Extension<AssignedClient>,
) -> Result<Json<Value>, ApiError> {
    let record = state
        .store
        .get_permissions(&client_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound("No permissions found for assigned client".into()))?;

    Ok(Json(json!({
        "success": true,
        "clientUuid": client_uuid,
        "hasPermissions": !record.permissions.is_empty(),
        "permissions": record.permissions,
    })))
}

pub async fn permissions(
    State(state): State<AppState>,
    Extension(AssignedClient(client_uuid)): Extension<AssignedClient>,
) -> Result<Json<Value>, ApiError> {
    let record = state
        .store
        .get_permissions(&client_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound("No permissions found for assigned client".into()))?;
    let tier = record.tier();

    Ok(Json(json!({
        "success": true,
        "permissions": record,
        "tier": tier,
    })))
}

/// Active ServiceM8 jobs for the caller's client.
pub async fn jobs(
    State(state): State<AppState>,
    Extension(AssignedClient(client_uuid)): Extension<AssignedClient>,
) -> Result<Json<Value>, ApiError> {
    let jobs: Vec<_> = state
        .servicem8()?
        .jobs_for_company(&client_uuid)
        .await?
        .into_iter()
        .filter(|job| job.is_active() && job.belongs_to(&client_uuid))
        .collect();

    Ok(Json(json!({
        "success": true,
        "count": jobs.len(),
        "jobs": jobs,
    })))
}

pub async fn quotes(
    State(state): State<AppState>,
    Extension(AssignedClient(client_uuid)): Extension<AssignedClient>,
) -> Result<Json<Value>, ApiError> {
    let quotes = state.store.quotes_for_client(&client_uuid).await?;
    Ok(Json(json!({
        "success": true,
        "count": quotes.len(),
        "quotes": quotes,
    })))
}
