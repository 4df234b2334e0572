//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::author::Author;

/// Book record with its authors
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    /// Authors linked through `book_author`
    #[sqlx(skip)]
    pub authors: Vec<Author>,
    /// Holding library; not serialized, read through the library's book list
    #[serde(skip)]
    pub library_id: Option<i64>,
    /// Current borrower; not serialized, read through the customer's book list
    #[serde(skip)]
    pub customer_id: Option<i64>,
}

/// Book without relations, as listed in an author's book set
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: Option<String>,
}

/// Create / update book request.
///
/// Updates replace every field: an omitted title is stored as null.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookInput {
    /// Ignored on update, where the path id wins
    pub id: Option<i64>,
    pub title: Option<String>,
}
