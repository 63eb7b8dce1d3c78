//! API handlers and routing for the Book Store REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes.
///
/// This is the single place where (method, path) pairs are bound to
/// handlers.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/", get(health::greeting))
        .route("/health", get(health::health_check))
        // Books
        .route("/books", post(books::create_book))
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        .with_state(state)
        // OpenAPI documentation
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
