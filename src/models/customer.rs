//! Customer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Customer record with the books currently borrowed
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: Option<String>,
    /// Books whose `customer_id` points at this customer
    #[sqlx(skip)]
    pub books: Vec<Book>,
}

/// Create / update customer request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CustomerInput {
    pub id: Option<i64>,
    pub name: Option<String>,
}
