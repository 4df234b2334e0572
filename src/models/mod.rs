//! Data models for the library records API

pub mod author;
pub mod book;
pub mod customer;
pub mod library;

// Re-export commonly used types
pub use author::{Author, AuthorDetails, AuthorInput};
pub use book::{Book, BookInput, BookSummary};
pub use customer::{Customer, CustomerInput};
pub use library::{Library, LibraryInput};
