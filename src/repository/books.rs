//! Books repository for database operations

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInput},
};

/// Keyed storage for books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
    /// Overwrite the book with `data.id`, clearing its library and borrower,
    /// or insert a new book with a generated id when the id is absent or unknown
    async fn save(&self, data: &BookInput) -> AppResult<Book>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Reference columns never present in a book payload, so a full overwrite resets them
const HIDDEN_REFERENCES: &[&str] = &["library_id", "customer_id"];

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let mut books = sqlx::query_as::<_, Book>(
            "SELECT id, title, library_id, customer_id FROM book ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        attach_authors(&self.pool, &mut books).await?;
        Ok(books)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, library_id, customer_id FROM book WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(book) = book else {
            return Ok(None);
        };
        let mut books = vec![book];
        attach_authors(&self.pool, &mut books).await?;
        Ok(books.pop())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        super::row_exists(&self.pool, "book", id).await
    }

    async fn save(&self, data: &BookInput) -> AppResult<Book> {
        let id = super::save_named(
            &self.pool,
            "book",
            "title",
            HIDDEN_REFERENCES,
            data.id,
            data.title.as_deref(),
        )
        .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Book {} missing after save", id)))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        super::delete_row(&self.pool, "book", id).await
    }
}

/// Entity whose book list is derived from a reference column on `book`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookHolder {
    Library,
    Customer,
}

impl BookHolder {
    fn column(self) -> &'static str {
        match self {
            BookHolder::Library => "library_id",
            BookHolder::Customer => "customer_id",
        }
    }

    fn holder_of(self, book: &Book) -> Option<i64> {
        match self {
            BookHolder::Library => book.library_id,
            BookHolder::Customer => book.customer_id,
        }
    }
}

#[derive(FromRow)]
struct BookAuthorRow {
    book_id: i64,
    author_id: i64,
    name: Option<String>,
}

/// Fill `authors` on each book from the join table
pub(crate) async fn attach_authors(pool: &Pool<Postgres>, books: &mut [Book]) -> AppResult<()> {
    if books.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
    let rows = sqlx::query_as::<_, BookAuthorRow>(
        r#"
        SELECT ba.book_id, a.id AS author_id, a.name
        FROM book_author ba
        JOIN author a ON a.id = ba.author_id
        WHERE ba.book_id = ANY($1)
        ORDER BY a.id
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    let mut by_book: HashMap<i64, Vec<Author>> = HashMap::new();
    for row in rows {
        by_book.entry(row.book_id).or_default().push(Author {
            id: row.author_id,
            name: row.name,
        });
    }

    for book in books.iter_mut() {
        book.authors = by_book.remove(&book.id).unwrap_or_default();
    }
    Ok(())
}

/// Books referencing any of `holder_ids`, grouped by holder id
pub(crate) async fn books_held_by(
    pool: &Pool<Postgres>,
    holder: BookHolder,
    holder_ids: Vec<i64>,
) -> AppResult<HashMap<i64, Vec<Book>>> {
    if holder_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT id, title, library_id, customer_id FROM book WHERE {} = ANY($1) ORDER BY id",
        holder.column()
    );
    let mut books = sqlx::query_as::<_, Book>(&query)
        .bind(holder_ids)
        .fetch_all(pool)
        .await?;
    attach_authors(pool, &mut books).await?;

    let mut grouped: HashMap<i64, Vec<Book>> = HashMap::new();
    for book in books {
        if let Some(holder_id) = holder.holder_of(&book) {
            grouped.entry(holder_id).or_default().push(book);
        }
    }
    Ok(grouped)
}

/// Point a book's single-valued reference at `holder_id`, replacing any
/// previous holder.
pub(crate) async fn assign_book(
    pool: &Pool<Postgres>,
    holder: BookHolder,
    holder_id: i64,
    book_id: i64,
) -> AppResult<()> {
    let query = format!("UPDATE book SET {} = $1 WHERE id = $2", holder.column());
    let result = sqlx::query(&query)
        .bind(holder_id)
        .bind(book_id)
        .execute(pool)
        .await
        .map_err(|e| {
            super::link_error(e, format!("{:?} {} not found", holder, holder_id))
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Book {} not found", book_id)));
    }
    Ok(())
}
