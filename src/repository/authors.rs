//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetails, AuthorInput, BookSummary},
};

/// Keyed storage for authors and the `book_author` join rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Author>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
    async fn save(&self, data: &AuthorInput) -> AppResult<Author>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    /// Author together with its book set
    async fn find_with_books(&self, id: i64) -> AppResult<Option<AuthorDetails>>;
    /// Record that `author_id` wrote `book_id`; linking twice is a no-op
    async fn link_book(&self, author_id: i64, book_id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT id, name FROM author ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM author WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        super::row_exists(&self.pool, "author", id).await
    }

    async fn save(&self, data: &AuthorInput) -> AppResult<Author> {
        let id =
            super::save_named(&self.pool, "author", "name", &[], data.id, data.name.as_deref())
                .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Author {} missing after save", id)))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        super::delete_row(&self.pool, "author", id).await
    }

    async fn find_with_books(&self, id: i64) -> AppResult<Option<AuthorDetails>> {
        let Some(author) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let books = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT b.id, b.title
            FROM book_author ba
            JOIN book b ON b.id = ba.book_id
            WHERE ba.author_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(AuthorDetails::new(author, books)))
    }

    async fn link_book(&self, author_id: i64, book_id: i64) -> AppResult<()> {
        // One join row serves both directions of the relation
        sqlx::query(
            "INSERT INTO book_author (book_id, author_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(book_id)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            super::link_error(e, format!("Author {} or book {} not found", author_id, book_id))
        })?;
        Ok(())
    }
}
