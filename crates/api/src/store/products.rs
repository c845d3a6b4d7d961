//! Product repository over the static catalog.

use minishop_core::Product;

use super::Store;

/// Repository for catalog lookups.
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn list(&self) -> &'a [Product] {
        &self.store.products
    }

    /// Find the first product whose ID loosely matches a route parameter.
    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&'a Product> {
        self.store
            .products
            .iter()
            .find(|product| product.id.matches(product_id))
    }
}
