//! Author service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetails, AuthorInput},
    repository::{AuthorStore, BookStore},
};

#[derive(Clone)]
pub struct AuthorsService {
    authors: Arc<dyn AuthorStore>,
    books: Arc<dyn BookStore>,
}

impl AuthorsService {
    pub fn new(authors: Arc<dyn AuthorStore>, books: Arc<dyn BookStore>) -> Self {
        Self { authors, books }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Author>> {
        self.authors.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    pub async fn create(&self, data: AuthorInput) -> AppResult<Author> {
        let author = self.authors.save(&data).await?;
        tracing::info!("Created author id={}", author.id);
        Ok(author)
    }

    pub async fn update(&self, id: i64, mut data: AuthorInput) -> AppResult<Author> {
        if !self.authors.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        data.id = Some(id);
        self.authors.save(&data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.authors.delete_by_id(id).await
    }

    /// Link a book to an author. Both must exist; nothing is written otherwise.
    /// The book's author set and the author's book set share the same join
    /// row, so both directions change together.
    pub async fn add_book(&self, author_id: i64, book_id: i64) -> AppResult<AuthorDetails> {
        if !self.authors.exists_by_id(author_id).await? {
            return Err(AppError::NotFound(format!("Author {} not found", author_id)));
        }
        if self.books.find_by_id(book_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }

        self.authors.link_book(author_id, book_id).await?;
        tracing::info!("Linked book id={} to author id={}", book_id, author_id);

        self.authors
            .find_with_books(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", author_id)))
    }
}
