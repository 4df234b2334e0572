//! Business logic services

pub mod authors;
pub mod books;
pub mod customers;
pub mod libraries;

use std::sync::Arc;

use crate::repository::{AuthorStore, BookStore, CustomerStore, LibraryStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub customers: customers::CustomersService,
    pub libraries: libraries::LibrariesService,
}

impl Services {
    /// Create all services backed by the PostgreSQL repository
    pub fn new(repository: Repository) -> Self {
        Self::with_stores(
            Arc::new(repository.books),
            Arc::new(repository.authors),
            Arc::new(repository.customers),
            Arc::new(repository.libraries),
        )
    }

    /// Create all services over arbitrary stores
    pub fn with_stores(
        books: Arc<dyn BookStore>,
        authors: Arc<dyn AuthorStore>,
        customers: Arc<dyn CustomerStore>,
        libraries: Arc<dyn LibraryStore>,
    ) -> Self {
        Self {
            books: books::BooksService::new(books.clone()),
            authors: authors::AuthorsService::new(authors, books.clone()),
            customers: customers::CustomersService::new(customers, books.clone()),
            libraries: libraries::LibrariesService::new(libraries, books),
        }
    }
}
