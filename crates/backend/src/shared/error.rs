use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::ValidationError;
use serde_json::json;
use thiserror::Error;

/// Failure of an enquiry service call, mapped onto an HTTP status by the handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": err.to_string(), "field": err.field() })),
            )
                .into_response(),
            ServiceError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ServiceError::Storage(err) => {
                tracing::error!("Storage error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
