//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//!
//! # Users
//! POST   /api/register              - Register (email + password)
//!
//! # Products
//! GET    /api/products              - Full catalog
//! GET    /api/products/{product_id} - Product detail
//!
//! # Cart (requires x-user-id)
//! GET    /api/cart                  - Caller's cart
//! PUT    /api/cart/{product_id}     - Add one unit of a product
//! DELETE /api/cart/{product_id}     - Remove every unit of a product
//! POST   /api/cart/checkout         - Turn the cart into an order
//!
//! # Orders (requires x-user-id)
//! GET    /api/orders                - Caller's orders
//! GET    /api/orders/{order_id}     - Order detail
//! ```
//!
//! `checkout` is a static segment, so it takes precedence over
//! `{product_id}`. `PUT` and `DELETE` on it still act on a product named
//! `checkout`, exactly like any other `{product_id}`.
//!
//! Unknown paths and unsupported methods on known paths both answer 404
//! `Route not found.` in the error envelope.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the API router (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/register", post(auth::register))
        .route("/api/products", get(products::index))
        .route("/api/products/{product_id}", get(products::show))
        .route("/api/cart", get(cart::show))
        .route(
            "/api/cart/checkout",
            post(cart::checkout)
                .put(cart::add_checkout_segment)
                .delete(cart::remove_checkout_segment),
        )
        .route(
            "/api/cart/{product_id}",
            put(cart::add).delete(cart::remove),
        )
        .route("/api/orders", get(orders::index))
        .route("/api/orders/{order_id}", get(orders::show))
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Answer unknown routes and unsupported methods with the standard error envelope.
async fn fallback() -> AppError {
    AppError::NotFound("Route not found.".to_string())
}
