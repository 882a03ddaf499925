use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::query::QueryError;

/// Failures as seen by HTTP clients.
#[derive(Debug)]
pub enum AppError {
    /// Well-formed request with nothing to return. 404 with an `error` field.
    NotFound(String),
    /// Engine-level fault. 500 with a generic `message`; cause goes to the log.
    Internal(&'static str),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Source(cause) => {
                tracing::error!("failed to load question cache: {cause}");
                AppError::Internal("failed to fetch questions")
            }
            QueryError::EmptyDataset => {
                tracing::error!("question dataset is empty");
                AppError::Internal("no questions available")
            }
            QueryError::NoLicenseMatch(code) => {
                AppError::NotFound(format!("no questions found for license type {code}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message })),
            )
                .into_response(),
        }
    }
}
