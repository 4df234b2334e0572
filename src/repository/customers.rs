//! Customers repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::books::{self, BookHolder};
use crate::{
    error::{AppError, AppResult},
    models::{Customer, CustomerInput},
};

/// Keyed storage for customers; borrowed books come from `book.customer_id`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
    async fn save(&self, data: &CustomerInput) -> AppResult<Customer>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    /// Make `customer_id` the borrower of `book_id`, replacing any previous one
    async fn link_book(&self, customer_id: i64, book_id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn with_books(&self, mut customers: Vec<Customer>) -> AppResult<Vec<Customer>> {
        let ids = customers.iter().map(|c| c.id).collect();
        let mut held = books::books_held_by(&self.pool, BookHolder::Customer, ids).await?;
        for customer in customers.iter_mut() {
            customer.books = held.remove(&customer.id).unwrap_or_default();
        }
        Ok(customers)
    }
}

#[async_trait]
impl CustomerStore for CustomersRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>("SELECT id, name FROM customer ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        self.with_books(rows).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        let row = sqlx::query_as::<_, Customer>("SELECT id, name FROM customer WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(self.with_books(row.into_iter().collect()).await?.pop())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        super::row_exists(&self.pool, "customer", id).await
    }

    async fn save(&self, data: &CustomerInput) -> AppResult<Customer> {
        let id =
            super::save_named(&self.pool, "customer", "name", &[], data.id, data.name.as_deref())
                .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Customer {} missing after save", id)))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        super::delete_row(&self.pool, "customer", id).await
    }

    async fn link_book(&self, customer_id: i64, book_id: i64) -> AppResult<()> {
        books::assign_book(&self.pool, BookHolder::Customer, customer_id, book_id).await
    }
}
