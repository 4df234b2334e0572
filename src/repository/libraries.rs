//! Libraries repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::books::{self, BookHolder};
use crate::{
    error::{AppError, AppResult},
    models::{Library, LibraryInput},
};

/// Keyed storage for libraries; held books come from `book.library_id`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Library>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Library>>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
    async fn save(&self, data: &LibraryInput) -> AppResult<Library>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    /// Move `book_id` into `library_id`, out of whatever library held it before
    async fn link_book(&self, library_id: i64, book_id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn with_books(&self, mut libraries: Vec<Library>) -> AppResult<Vec<Library>> {
        let ids = libraries.iter().map(|l| l.id).collect();
        let mut held = books::books_held_by(&self.pool, BookHolder::Library, ids).await?;
        for library in libraries.iter_mut() {
            library.books = held.remove(&library.id).unwrap_or_default();
        }
        Ok(libraries)
    }
}

#[async_trait]
impl LibraryStore for LibrariesRepository {
    async fn find_all(&self) -> AppResult<Vec<Library>> {
        let rows = sqlx::query_as::<_, Library>("SELECT id, name FROM library ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        self.with_books(rows).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Library>> {
        let row = sqlx::query_as::<_, Library>("SELECT id, name FROM library WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(self.with_books(row.into_iter().collect()).await?.pop())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        super::row_exists(&self.pool, "library", id).await
    }

    async fn save(&self, data: &LibraryInput) -> AppResult<Library> {
        let id =
            super::save_named(&self.pool, "library", "name", &[], data.id, data.name.as_deref())
                .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Library {} missing after save", id)))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        super::delete_row(&self.pool, "library", id).await
    }

    async fn link_book(&self, library_id: i64, book_id: i64) -> AppResult<()> {
        books::assign_book(&self.pool, BookHolder::Library, library_id, book_id).await
    }
}
