//! Repository layer for database operations
//!
//! Every entity table has the same keyed shape (`id BIGSERIAL` plus one text
//! column), so the insert-or-overwrite, existence and delete primitives are
//! shared here and each entity module adds its relation loading on top.

pub mod authors;
pub mod books;
pub mod customers;
pub mod libraries;

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

pub use authors::{AuthorStore, AuthorsRepository};
pub use books::{BookStore, BooksRepository};
pub use customers::{CustomerStore, CustomersRepository};
pub use libraries::{LibrariesRepository, LibraryStore};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
    pub authors: AuthorsRepository,
    pub customers: CustomersRepository,
    pub libraries: LibrariesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            authors: AuthorsRepository::new(pool.clone()),
            customers: CustomersRepository::new(pool.clone()),
            libraries: LibrariesRepository::new(pool),
        }
    }
}

/// Overwrite the row with the given id, or insert a row with a generated id
/// when the id is absent or unknown. Returns the id of the saved row.
///
/// `cleared` columns are reset to NULL on overwrite; they hold references the
/// payload never carries.
async fn save_named(
    pool: &Pool<Postgres>,
    table: &'static str,
    column: &'static str,
    cleared: &[&'static str],
    id: Option<i64>,
    value: Option<&str>,
) -> AppResult<i64> {
    let query = save_query(table, column, cleared);
    let saved = sqlx::query_scalar::<_, i64>(&query)
        .bind(id)
        .bind(value)
        .fetch_one(pool)
        .await?;

    if id.is_some_and(|requested| requested != saved) {
        tracing::debug!("No {} row with id {:?}, inserted as {}", table, id, saved);
    }
    Ok(saved)
}

fn save_query(table: &str, column: &str, cleared: &[&str]) -> String {
    let mut sets = vec![format!("{column} = $2")];
    sets.extend(cleared.iter().map(|c| format!("{c} = NULL")));

    format!(
        "WITH updated AS (\
             UPDATE {table} SET {sets} WHERE id = $1 RETURNING id\
         ), inserted AS (\
             INSERT INTO {table} ({column}) SELECT $2 \
             WHERE NOT EXISTS (SELECT 1 FROM updated) RETURNING id\
         ) \
         SELECT id FROM updated UNION ALL SELECT id FROM inserted",
        sets = sets.join(", ")
    )
}

async fn row_exists(pool: &Pool<Postgres>, table: &'static str, id: i64) -> AppResult<bool> {
    let query = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
    let exists = sqlx::query_scalar::<_, bool>(&query)
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// Delete by id; deleting an absent id is not an error
async fn delete_row(pool: &Pool<Postgres>, table: &'static str, id: i64) -> AppResult<()> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    tracing::debug!("Deleted {} row(s) from {} for id {}", result.rows_affected(), table, id);
    Ok(())
}

/// A foreign key violation on a link write means one side was deleted
/// between lookup and write.
fn link_error(err: sqlx::Error, what: String) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::NotFound(what),
        _ => AppError::Database(err),
    }
}
