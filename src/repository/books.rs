//! Books repository: translates the four domain operations into store calls.

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookFields},
};

const BOOK_COLUMNS: &str = "id, title, author, publish_year, created_at, updated_at";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Persist a new book. The store assigns the id.
    pub async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        let now = Utc::now();

        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, author, publish_year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING {BOOK_COLUMNS}
            "#,
        ))
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.publish_year)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Return all books in the store's natural order.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books"))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Get a book by id, or `None` if no record matches.
    ///
    /// A malformed id is rejected by the store layer (500), which is a
    /// different outcome from a well-formed id that matches nothing.
    pub async fn get(&self, id: &str) -> AppResult<Option<Book>> {
        let id = Uuid::parse_str(id)?;

        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Replace `title`/`author`/`publishYear` of an existing book.
    ///
    /// The id never changes. Returns `None` when no record matches.
    pub async fn replace(&self, id: &str, fields: &BookFields) -> AppResult<Option<Book>> {
        let id = Uuid::parse_str(id)?;
        let now = Utc::now();

        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET title = $1, author = $2, publish_year = $3, updated_at = $4
            WHERE id = $5
            RETURNING {BOOK_COLUMNS}
            "#,
        ))
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.publish_year)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Remove a book permanently. Returns `false` when no record matches.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let id = Uuid::parse_str(id)?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
