use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::middleware::AssignedClient;
use crate::state::AppState;

/// Job position, served from `job:location:<uuid>` and filled from
/// ServiceM8 on a miss.
pub async fn location(
    State(state): State<AppState>,
    Extension(AssignedClient(client_uuid)): Extension<AssignedClient>,
    Path(job_uuid): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let job_uuid = job_uuid.trim().to_string();
    if job_uuid.is_empty() {
        return Err(ApiError::Validation("job uuid is required".into()));
    }

    if let Some(location) = state.store.cached_job_location(&job_uuid).await? {
        if !location.visible_to(&client_uuid) {
            return Err(ApiError::Forbidden("Job does not belong to your account"));
        }
        return Ok(Json(json!({
            "success": true,
            "cached": true,
            "location": location,
        })));
    }

    let mut job = state.servicem8()?.get_job(&job_uuid).await?;
    job.uuid.get_or_insert_with(|| job_uuid.clone());
    let location = job
        .location()
        .ok_or_else(|| ApiError::Internal(format!("job {job_uuid} has no uuid")))?;

    state.store.cache_job_location(&location).await?;
    tracing::debug!(%job_uuid, geo_valid = location.geo_valid, "cached job location");

    if !location.visible_to(&client_uuid) {
        return Err(ApiError::Forbidden("Job does not belong to your account"));
    }
    Ok(Json(json!({
        "success": true,
        "cached": false,
        "location": location,
    })))
}
