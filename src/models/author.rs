//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::BookSummary;

/// Author record. The book set is only exposed through [`AuthorDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: Option<String>,
}

/// Author with the books linked to it
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthorDetails {
    pub id: i64,
    pub name: Option<String>,
    pub books: Vec<BookSummary>,
}

/// Create / update author request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AuthorInput {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl AuthorDetails {
    pub fn new(author: Author, books: Vec<BookSummary>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            books,
        }
    }
}
