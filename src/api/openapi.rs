//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, customers, health, libraries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Books, authors, customers and libraries REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::add_book_to_author,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        customers::add_book_to_customer,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::delete_library,
        libraries::add_book_to_library,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookSummary,
            crate::models::BookInput,
            crate::models::Author,
            crate::models::AuthorDetails,
            crate::models::AuthorInput,
            crate::models::Customer,
            crate::models::CustomerInput,
            crate::models::Library,
            crate::models::LibraryInput,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book records"),
        (name = "authors", description = "Author records and authorship links"),
        (name = "customers", description = "Customers and borrowed books"),
        (name = "libraries", description = "Libraries and held books")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
