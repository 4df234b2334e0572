//! Library API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Library, LibraryInput},
    AppState,
};

/// List all libraries
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    responses(
        (status = 200, description = "Library list", body = Vec<Library>)
    )
)]
pub async fn list_libraries(State(state): State<AppState>) -> AppResult<Json<Vec<Library>>> {
    let libraries = state.services.libraries.get_all().await?;
    Ok(Json(libraries))
}

/// Get library by ID
#[utoipa::path(
    get,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library details", body = Library),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_library(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get_by_id(id).await?;
    Ok(Json(library))
}

/// Create library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = LibraryInput,
    responses(
        (status = 201, description = "Library created", body = Library)
    )
)]
pub async fn create_library(
    State(state): State<AppState>,
    Json(data): Json<LibraryInput>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let library = state.services.libraries.create(data).await?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// Replace a library
#[utoipa::path(
    put,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Library ID")),
    request_body = LibraryInput,
    responses(
        (status = 200, description = "Library updated", body = Library),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_library(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<LibraryInput>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.update(id, data).await?;
    Ok(Json(library))
}

/// Delete library
#[utoipa::path(
    delete,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Library ID")),
    responses(
        (status = 204, description = "Library deleted, or never existed")
    )
)]
pub async fn delete_library(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.libraries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Place a book in a library
#[utoipa::path(
    post,
    path = "/libraries/{library_id}/addBook/{book_id}",
    tag = "libraries",
    params(
        ("library_id" = i64, Path, description = "Library ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Library with its books", body = Library),
        (status = 404, description = "Library or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_to_library(
    State(state): State<AppState>,
    Path((library_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.add_book(library_id, book_id).await?;
    Ok(Json(library))
}
