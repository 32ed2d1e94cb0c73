use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blockscope_enrichment::PipelineError;
use serde_json::json;

/// Application error type that converts to HTTP responses
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream service error");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match &e {
            PipelineError::Resolution(_) => AppError::NotFound(e.to_string()),
            PipelineError::BlockList(_) => AppError::Upstream(e.to_string()),
        }
    }
}
