//! Library service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Library, LibraryInput},
    repository::{BookStore, LibraryStore},
};

#[derive(Clone)]
pub struct LibrariesService {
    libraries: Arc<dyn LibraryStore>,
    books: Arc<dyn BookStore>,
}

impl LibrariesService {
    pub fn new(libraries: Arc<dyn LibraryStore>, books: Arc<dyn BookStore>) -> Self {
        Self { libraries, books }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Library>> {
        self.libraries.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Library> {
        self.libraries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))
    }

    pub async fn create(&self, data: LibraryInput) -> AppResult<Library> {
        let library = self.libraries.save(&data).await?;
        tracing::info!("Created library id={}", library.id);
        Ok(library)
    }

    pub async fn update(&self, id: i64, mut data: LibraryInput) -> AppResult<Library> {
        if !self.libraries.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Library {} not found", id)));
        }
        data.id = Some(id);
        self.libraries.save(&data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.libraries.delete_by_id(id).await
    }

    /// Place a book in a library. A book belongs to at most one library, so
    /// this moves it out of any library that held it before.
    pub async fn add_book(&self, library_id: i64, book_id: i64) -> AppResult<Library> {
        if !self.libraries.exists_by_id(library_id).await? {
            return Err(AppError::NotFound(format!("Library {} not found", library_id)));
        }
        let Some(book) = self.books.find_by_id(book_id).await? else {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        };

        self.libraries.link_book(library_id, book_id).await?;
        match book.library_id {
            Some(previous) if previous != library_id => tracing::info!(
                "Moved book id={} from library id={} to library id={}",
                book_id,
                previous,
                library_id
            ),
            _ => tracing::info!("Placed book id={} in library id={}", book_id, library_id),
        }

        self.get_by_id(library_id).await
    }
}
