//! Customer API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Customer, CustomerInput},
    AppState,
};

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "Customer list", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.get_all().await?;
    Ok(Json(customers))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_by_id(id).await?;
    Ok(Json(customer))
}

/// Create customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = Customer)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(data): Json<CustomerInput>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.services.customers.create(data).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomerInput>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.update(id, data).await?;
    Ok(Json(customer))
}

/// Delete customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted, or never existed")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lend a book to a customer
#[utoipa::path(
    post,
    path = "/customers/{customer_id}/addBook/{book_id}",
    tag = "customers",
    params(
        ("customer_id" = i64, Path, description = "Customer ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Customer with its borrowed books", body = Customer),
        (status = 404, description = "Customer or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_to_customer(
    State(state): State<AppState>,
    Path((customer_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.add_book(customer_id, book_id).await?;
    Ok(Json(customer))
}
