//! Author API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Author, AuthorDetails, AuthorInput},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.get_all().await?;
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_by_id(id).await?;
    Ok(Json(author))
}

/// Create author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(data): Json<AuthorInput>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.authors.create(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Replace an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AuthorInput>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, data).await?;
    Ok(Json(author))
}

/// Delete author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted, or never existed")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Link a book to an author
#[utoipa::path(
    post,
    path = "/authors/{author_id}/addBook/{book_id}",
    tag = "authors",
    params(
        ("author_id" = i64, Path, description = "Author ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Author with its books", body = AuthorDetails),
        (status = 404, description = "Author or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_to_author(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<AuthorDetails>> {
    let author = state.services.authors.add_book(author_id, book_id).await?;
    Ok(Json(author))
}
