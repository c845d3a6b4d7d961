//! Order repository.

use minishop_core::UserId;

use super::Store;
use crate::models::Order;

/// Repository for placed orders.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Append an order.
    pub fn create(&self, order: Order) -> Order {
        self.store.orders.write().push(order.clone());
        order
    }

    /// All orders placed by a user, oldest first.
    #[must_use]
    pub fn list_by_user(&self, user_id: &UserId) -> Vec<Order> {
        self.store
            .orders
            .read()
            .iter()
            .filter(|order| &order.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Get one of a user's orders by ID.
    ///
    /// Orders belonging to other users are reported as absent.
    #[must_use]
    pub fn get_for_user(&self, user_id: &UserId, order_id: &str) -> Option<Order> {
        self.store
            .orders
            .read()
            .iter()
            .find(|order| order.id.as_str() == order_id && &order.user_id == user_id)
            .cloned()
    }
}
