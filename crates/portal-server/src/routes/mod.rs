pub mod admin;
pub mod client;
pub mod debug;
pub mod health;
pub mod jobs;

use axum::extract::rejection::JsonRejection;

use crate::error::ApiError;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
