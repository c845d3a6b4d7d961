//! Order domain type.

use serde::Serialize;

use minishop_core::{OrderId, Price, Product, UserId};

/// A placed order: an immutable snapshot of a cart at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub products: Vec<Product>,
    pub total_price: Price,
}

impl Order {
    /// Create an order from the products taken out of a cart.
    #[must_use]
    pub fn new(user_id: UserId, products: Vec<Product>) -> Self {
        let total_price = products.iter().map(|product| product.price).sum();
        Self {
            id: OrderId::generate(),
            user_id,
            products,
            total_price,
        }
    }
}
