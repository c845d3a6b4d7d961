//! Cart repository.

use minishop_core::{Product, UserId};

use super::Store;
use crate::models::Cart;

/// Repository for user carts.
pub struct CartRepository<'a> {
    store: &'a Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get a user's cart.
    #[must_use]
    pub fn get_by_user(&self, user_id: &UserId) -> Option<Cart> {
        self.store
            .carts
            .lock()
            .iter()
            .find(|cart| &cart.user_id == user_id)
            .cloned()
    }

    /// Append a product to a user's cart, creating the cart if needed.
    ///
    /// Returns the cart as it stands after the append.
    pub fn add_product(&self, user_id: &UserId, product: Product) -> Cart {
        let mut carts = self.store.carts.lock();

        match carts.iter_mut().find(|cart| &cart.user_id == user_id) {
            Some(cart) => {
                cart.products.push(product);
                cart.clone()
            }
            None => {
                tracing::debug!(user_id = %user_id, "Creating cart");
                let mut cart = Cart::new(user_id.clone());
                cart.products.push(product);
                carts.push(cart.clone());
                cart
            }
        }
    }

    /// Remove every entry loosely matching `product_id` from a user's cart.
    ///
    /// Returns `None` if the user has no cart.
    pub fn remove_product(&self, user_id: &UserId, product_id: &str) -> Option<Cart> {
        let mut carts = self.store.carts.lock();
        let cart = carts.iter_mut().find(|cart| &cart.user_id == user_id)?;
        cart.remove_matching(product_id);
        Some(cart.clone())
    }

    /// Empty a user's cart, returning what it held.
    ///
    /// Returns `None`, leaving everything untouched, if the user has no cart
    /// or the cart is already empty.
    pub fn take_products(&self, user_id: &UserId) -> Option<Vec<Product>> {
        let mut carts = self.store.carts.lock();
        let cart = carts
            .iter_mut()
            .find(|cart| &cart.user_id == user_id && !cart.products.is_empty())?;
        Some(std::mem::take(&mut cart.products))
    }
}
