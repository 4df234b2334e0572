//! Library model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Library record with the books it holds
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i64,
    pub name: Option<String>,
    #[sqlx(skip)]
    pub books: Vec<Book>,
}

/// Create / update library request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LibraryInput {
    pub id: Option<i64>,
    pub name: Option<String>,
}
