//! Book service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    books: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Book>> {
        self.books.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Save a new book; a client-supplied id is kept as-is
    pub async fn create(&self, data: BookInput) -> AppResult<Book> {
        let book = self.books.save(&data).await?;
        tracing::info!("Created book id={}", book.id);
        Ok(book)
    }

    /// Replace the book's fields. Unknown ids are rejected without a write.
    pub async fn update(&self, id: i64, mut data: BookInput) -> AppResult<Book> {
        if !self.books.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        data.id = Some(id);
        self.books.save(&data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.books.delete_by_id(id).await
    }
}
