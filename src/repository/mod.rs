//! Repository layer for store operations

pub mod books;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the shared database connection pool.
///
/// The pool is opened once at startup and lives for the whole process;
/// handlers only ever borrow it through this struct.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
