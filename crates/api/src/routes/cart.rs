//! Cart and checkout route handlers.
//!
//! All handlers require a caller identity; `RequireUser` comes first in each
//! signature so a missing or unknown `x-user-id` is reported before any
//! product or cart lookup.
//!
//! `checkout` is only special for `POST`. `PUT` and `DELETE` on
//! `/api/cart/checkout` treat it as an ordinary product ID.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::{Cart, Order};
use crate::services::CartService;
use crate::state::AppState;

/// Show the caller's cart.
#[instrument(skip(state))]
pub async fn show(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Cart>> {
    let cart = CartService::new(state.store()).cart(&user_id)?;
    Ok(Json(cart))
}

/// Add one unit of a product to the caller's cart.
#[instrument(skip(state))]
pub async fn add(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Cart>> {
    let cart = CartService::new(state.store()).add_product(&user_id, &product_id)?;
    Ok(Json(cart))
}

/// Remove every unit of a product from the caller's cart.
#[instrument(skip(state))]
pub async fn remove(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Cart>> {
    let cart = CartService::new(state.store()).remove_product(&user_id, &product_id)?;
    Ok(Json(cart))
}

/// Segment of the checkout route, seen as a product ID by `PUT`/`DELETE`.
const CHECKOUT_SEGMENT: &str = "checkout";

/// `PUT /api/cart/checkout`: add the product whose ID is `checkout`.
#[instrument(skip(state))]
pub async fn add_checkout_segment(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Cart>> {
    let cart = CartService::new(state.store()).add_product(&user_id, CHECKOUT_SEGMENT)?;
    Ok(Json(cart))
}

/// `DELETE /api/cart/checkout`: remove the product whose ID is `checkout`.
#[instrument(skip(state))]
pub async fn remove_checkout_segment(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Cart>> {
    let cart = CartService::new(state.store()).remove_product(&user_id, CHECKOUT_SEGMENT)?;
    Ok(Json(cart))
}

/// Place an order for everything in the caller's cart.
#[instrument(skip(state))]
pub async fn checkout(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Order>> {
    let order = CartService::new(state.store()).checkout(&user_id)?;
    Ok(Json(order))
}
