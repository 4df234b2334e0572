//! Customer service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Customer, CustomerInput},
    repository::{BookStore, CustomerStore},
};

#[derive(Clone)]
pub struct CustomersService {
    customers: Arc<dyn CustomerStore>,
    books: Arc<dyn BookStore>,
}

impl CustomersService {
    pub fn new(customers: Arc<dyn CustomerStore>, books: Arc<dyn BookStore>) -> Self {
        Self { customers, books }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Customer>> {
        self.customers.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn create(&self, data: CustomerInput) -> AppResult<Customer> {
        let customer = self.customers.save(&data).await?;
        tracing::info!("Created customer id={}", customer.id);
        Ok(customer)
    }

    pub async fn update(&self, id: i64, mut data: CustomerInput) -> AppResult<Customer> {
        if !self.customers.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Customer {} not found", id)));
        }
        data.id = Some(id);
        self.customers.save(&data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.customers.delete_by_id(id).await
    }

    /// Lend a book to a customer, replacing any previous borrower
    pub async fn add_book(&self, customer_id: i64, book_id: i64) -> AppResult<Customer> {
        if !self.customers.exists_by_id(customer_id).await? {
            return Err(AppError::NotFound(format!("Customer {} not found", customer_id)));
        }
        if self.books.find_by_id(book_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }

        self.customers.link_book(customer_id, book_id).await?;
        tracing::info!("Lent book id={} to customer id={}", book_id, customer_id);

        self.get_by_id(customer_id).await
    }
}
