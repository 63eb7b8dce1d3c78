//! Health check endpoints

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Status code of the root greeting. Non-standard but valid 2xx.
const GREETING_STATUS: u16 = 234;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Root greeting endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 234, description = "Service greeting", body = String)
    )
)]
pub async fn greeting() -> impl IntoResponse {
    let status = StatusCode::from_u16(GREETING_STATUS).unwrap_or(StatusCode::OK);
    (status, "Hello World!")
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
