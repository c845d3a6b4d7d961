//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use minishop_core::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the whole catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().products().list().to_vec())
}

/// Show a single product.
///
/// Numeric catalog IDs match their textual form, so `/api/products/7` finds
/// a product whose ID is the number `7`.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>> {
    state
        .store()
        .products()
        .get(&product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found.".to_string()))
}
