use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lineup_core::LineupError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
    UnprocessableEntity(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LineupError> for ApiError {
    fn from(err: LineupError) -> Self {
        let message = err.to_string();

        match err {
            LineupError::UnknownTactic { .. } | LineupError::SlotNotFound { .. } => {
                ApiError::NotFound(message)
            }
            LineupError::RosterFetchFailed { .. } => ApiError::ServiceUnavailable(message),
            LineupError::InvalidCatalog(_) => ApiError::InternalError(message),
            LineupError::UnknownSlot { .. }
            | LineupError::PlayerDisabled { .. }
            | LineupError::PlayerAlreadyPlaced { .. }
            | LineupError::DuplicatePlayer { .. }
            | LineupError::DuplicateSlot { .. }
            | LineupError::UnresolvedPlayer { .. } => ApiError::UnprocessableEntity(message),
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
