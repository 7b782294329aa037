use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::models::{NewProduct, Product, ProductFilter};

/// GET /products
///
/// List every stored product.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.stock.run(|s| s.products().list_all()).await?;
    Ok(Json(products))
}

/// GET /products/filter?brand=Natura&productCode=123&expirationDate=01/01/2024
///
/// List products matching all supplied criteria. Absent or empty criteria
/// are not applied; no criteria returns everything.
pub async fn filter_products(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state
        .stock
        .run(move |s| s.products().filter(&filter))
        .await?;
    Ok(Json(products))
}

/// GET /products/{id}
///
/// Fetch a single product by its id.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state.stock.run(move |s| s.products().get(id)).await?;

    match product {
        Some(p) => Ok(Json(p)),
        None => Err(AppError::not_found(format!("No product with id {id}"))),
    }
}

/// POST /products
///
/// Create a product from the JSON body. Returns 201 with the stored record
/// (including its assigned id) and a Location header pointing at it. A
/// missing or malformed body yields 400; a compound-key duplicate or any
/// other store fault yields 500 with the fault message.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new_product) = body.map_err(|e| AppError::bad_request(e.body_text()))?;

    let product = state
        .stock
        .run(move |s| s.products().insert(&new_product))
        .await?;

    let location = format!("/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// DELETE /products/{id}
///
/// Remove a product. Returns 204 on success, 404 if no record has that id.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.stock.run(move |s| s.products().delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
