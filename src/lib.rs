//! Book Store Server
//!
//! A Rust REST API server providing CRUD operations on book records,
//! backed by a PostgreSQL document table.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<repository::Repository>,
}
