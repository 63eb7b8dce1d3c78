//! Data models for the Book Store server

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookFields, BookPayload};
