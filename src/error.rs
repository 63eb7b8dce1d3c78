//! Error types for the Book Store server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type.
///
/// Three outcomes exist beyond success: a write payload with missing
/// fields, a well-formed id that matches no record, and a store-level
/// failure. A syntactically malformed id is a store-level failure, not
/// a not-found: the store rejects it before it can look anything up.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Data fields missing")]
    MissingFields,

    #[error("Book not found")]
    NotFound,

    #[error("invalid book id: {0}")]
    MalformedId(#[from] uuid::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Error response body. A single free-form message, no error code.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MalformedId(e) => {
                tracing::error!("Store rejected id: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Store error: {:?}", e);
                // Store failures surface their detail verbatim
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
