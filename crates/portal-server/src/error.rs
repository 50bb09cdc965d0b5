use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portal_core::CoreError;
use portal_kv::KvError;
use portal_servicem8::ServiceM8Error;
use serde_json::json;
use thiserror::Error;

/// Handler failure, rendered as `{"success": false, "message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] KvError),

    #[error("ServiceM8 error: {0}")]
    Upstream(#[from] ServiceM8Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::Upstream(ServiceM8Error::NotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other @ CoreError::Entropy(_) => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else if let Self::Upstream(_) = self {
            "Not found".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "success": false, "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::Unauthenticated("no token"), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::Forbidden("nope"), StatusCode::FORBIDDEN)]
    #[case(ApiError::NotFound("gone".into()), StatusCode::NOT_FOUND)]
    #[case(ApiError::Store(KvError::Command("ERR".into())), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(
        ApiError::Upstream(ServiceM8Error::NotFound { path: "/job/x.json".into() }),
        StatusCode::NOT_FOUND
    )]
    #[case(
        ApiError::Upstream(ServiceM8Error::RateLimited { retry_after_secs: 5 }),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn status_mapping(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status(), expected);
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn core_validation_is_bad_request() {
        let error = ApiError::from(CoreError::validation("companyName is required"));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "companyName is required");
    }

    #[test]
    fn core_entropy_failure_is_internal() {
        let error = ApiError::from(CoreError::Entropy("no randomness".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
