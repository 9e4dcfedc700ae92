#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Most collaborators degrade instead of erroring (fallback search results,
/// placeholder rewrites, empty history), so the variants here cover only the
/// failures that are allowed to reach the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown or restarted-away auto-apply session. The one hard failure in
    /// the core: proceeding would apply to nothing or to stale data.
    #[error("Search expired or invalid")]
    SessionExpiredOrInvalid,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Optional integration is missing its configuration.
    #[error("Missing configuration: {0}")]
    Misconfigured(String),

    #[error("Sheet sync error: {0}")]
    SheetSync(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::SessionExpiredOrInvalid => (
                StatusCode::BAD_REQUEST,
                "SESSION_EXPIRED",
                "Search expired or invalid.".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Misconfigured(msg) => {
                (StatusCode::BAD_REQUEST, "MISCONFIGURED", msg.clone())
            }
            AppError::SheetSync(msg) => {
                tracing::error!("Sheet sync error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SHEET_SYNC_ERROR",
                    msg.clone(),
                )
            }
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "MULTIPART_ERROR",
                format!("Invalid multipart body: {e}"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
