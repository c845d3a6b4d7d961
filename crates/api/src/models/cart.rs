//! Shopping cart domain type.

use serde::Serialize;

use minishop_core::{CartId, Product, UserId};

/// A user's shopping cart.
///
/// Each user has at most one cart, created on first add. `products` keeps
/// insertion order and may hold the same product several times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub products: Vec<Product>,
}

impl Cart {
    /// Create an empty cart for a user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: CartId::generate(),
            user_id,
            products: Vec::new(),
        }
    }

    /// Remove every entry whose ID loosely matches `product_id`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_matching(&mut self, product_id: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|product| !product.id.matches(product_id));
        before - self.products.len()
    }
}
