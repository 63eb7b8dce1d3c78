//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
};

/// Response body for the book listing
#[derive(Serialize, ToSchema)]
pub struct BookList {
    /// Number of books returned
    pub count: usize,
    /// All books, in the store's natural order
    pub data: Vec<Book>,
}

/// Response body for a single-book lookup.
///
/// An id that matches nothing yields `{"book": null}` with status 200,
/// while update and delete answer 404 for the same condition. The
/// asymmetry is deliberate and part of the API contract.
#[derive(Serialize, ToSchema)]
pub struct BookEnvelope {
    pub book: Option<Book>,
}

/// Plain confirmation message for update and delete
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Data fields missing", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let fields = payload.require_fields()?;

    let book = state.repository.books.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books with their count", body = BookList),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookList>> {
    let data = state.repository.books.list().await?;

    Ok(Json(BookList {
        count: data.len(),
        data,
    }))
}

/// Get a single book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "The book, or null when absent", body = BookEnvelope),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookEnvelope>> {
    let book = state.repository.books.get(&id).await?;
    Ok(Json(BookEnvelope { book }))
}

/// Replace a book's fields by id
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Data fields missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    let fields = payload.require_fields()?;

    state
        .repository
        .books
        .replace(&id, &fields)
        .await?
        .ok_or(crate::AppError::NotFound)?;

    Ok(Json(MessageResponse {
        message: "Book updated successfully".to_string(),
    }))
}

/// Delete a book by id
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.repository.books.delete(&id).await?;

    if !deleted {
        return Err(crate::AppError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
