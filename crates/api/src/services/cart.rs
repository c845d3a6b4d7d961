//! Cart and checkout service.
//!
//! Cart lifecycle per user:
//!
//! ```text
//! absent -> created (on first add) -> populated -> emptied (checkout) -> populated -> ...
//! ```
//!
//! Carts are never deleted.

use thiserror::Error;

use minishop_core::UserId;

use crate::models::{Cart, Order};
use crate::store::{CartRepository, OrderRepository, ProductRepository, Store};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// No catalog product matches the requested ID.
    #[error("product not found")]
    ProductNotFound,

    /// The user has no cart yet.
    #[error("cart not found")]
    CartNotFound,

    /// Checkout was attempted without anything to buy.
    #[error("cart is empty or not found")]
    EmptyCart,
}

/// Cart service.
pub struct CartService<'a> {
    products: ProductRepository<'a>,
    carts: CartRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            products: ProductRepository::new(store),
            carts: CartRepository::new(store),
            orders: OrderRepository::new(store),
        }
    }

    /// Get the user's cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user never added anything.
    pub fn cart(&self, user_id: &UserId) -> Result<Cart, CartError> {
        self.carts
            .get_by_user(user_id)
            .ok_or(CartError::CartNotFound)
    }

    /// Add one unit of a catalog product to the user's cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if no product matches `product_id`.
    pub fn add_product(&self, user_id: &UserId, product_id: &str) -> Result<Cart, CartError> {
        let product = self
            .products
            .get(product_id)
            .ok_or(CartError::ProductNotFound)?;

        let cart = self.carts.add_product(user_id, product.clone());
        tracing::debug!(
            user_id = %user_id,
            product_id = %product.id,
            items = cart.products.len(),
            "Added product to cart"
        );
        Ok(cart)
    }

    /// Remove every entry matching `product_id` from the user's cart.
    ///
    /// Removing a product that is not in the cart is not an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart.
    pub fn remove_product(&self, user_id: &UserId, product_id: &str) -> Result<Cart, CartError> {
        self.carts
            .remove_product(user_id, product_id)
            .ok_or(CartError::CartNotFound)
    }

    /// Turn the user's cart into an order and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::EmptyCart` if the user has no cart or it is empty.
    pub fn checkout(&self, user_id: &UserId) -> Result<Order, CartError> {
        let products = self
            .carts
            .take_products(user_id)
            .ok_or(CartError::EmptyCart)?;

        let order = self.orders.create(Order::new(user_id.clone(), products));
        tracing::info!(
            user_id = %user_id,
            order_id = %order.id,
            total_price = %order.total_price,
            "Order placed"
        );
        Ok(order)
    }
}
