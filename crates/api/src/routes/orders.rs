//! Order history route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::Order;
use crate::state::AppState;

/// List the caller's orders, oldest first.
#[instrument(skip(state))]
pub async fn index(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Json<Vec<Order>> {
    Json(state.store().orders().list_by_user(&user_id))
}

/// Show one of the caller's orders.
#[instrument(skip(state))]
pub async fn show(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>> {
    state
        .store()
        .orders()
        .get_for_user(&user_id, &order_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))
}
