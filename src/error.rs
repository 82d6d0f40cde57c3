//! Error types for the book service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures of the in-memory store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Missing books answer with a bare 404
            AppError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                let body = Json(ErrorResponse {
                    code: StatusCode::INTERNAL_SERVER_ERROR.as_u16().into(),
                    error: "StoreFailure".to_string(),
                    message: e.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
