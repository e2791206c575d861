use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::models::response::ApiResponse;

/// Failure to turn a request body into a `Notification`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),

    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("field '{field}' must be a string, found {found}")]
    FieldType {
        field: &'static str,
        found: &'static str,
    },
}

impl IntoResponse for DecodeError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected notification");

        let body = ApiResponse::<()>::error(
            self.to_string(),
            "Failed to decode notification".to_string(),
        );

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
