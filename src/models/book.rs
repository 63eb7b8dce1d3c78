//! Book record model and write-payload validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A book record as stored and returned by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier, immutable after creation
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Publication year, kept exactly as submitted (number or string)
    #[schema(value_type = Object)]
    pub publish_year: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or fully replacing a book.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub publish_year: Option<Value>,
}

/// The three writable fields of a book, known to be present.
#[derive(Debug, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publish_year: Value,
}

impl BookPayload {
    /// Check that `title`, `author` and `publishYear` are all present.
    ///
    /// A field that is absent or falsy (empty string, zero, `null`,
    /// `false`) counts as missing; there is no distinction between
    /// "not provided" and "provided but empty". No type coercion and
    /// no range check on `publishYear`.
    pub fn require_fields(self) -> AppResult<BookFields> {
        let title = self.title.filter(|t| !t.is_empty());
        let author = self.author.filter(|a| !a.is_empty());
        let publish_year = self.publish_year.filter(|y| !is_falsy(y));

        match (title, author, publish_year) {
            (Some(title), Some(author), Some(publish_year)) => Ok(BookFields {
                title,
                author,
                publish_year,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

/// JSON value falsiness: `null`, `false`, numeric zero, empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
