//! Product catalog parsing and validation.
//!
//! A catalog is a JSON array of products:
//!
//! ```json
//! [
//!   { "id": "P1", "name": "Tea", "price": 10 },
//!   { "id": 2, "name": "Cup", "price": 4.5, "color": "blue" }
//! ]
//! ```
//!
//! IDs may be strings or numbers but must be unique, and prices must be
//! non-negative. The catalog is loaded once at startup and never mutated.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Product, ProductId};

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input is not a JSON array of well-formed products.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share the same ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has an empty name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// A validated, ordered list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-constructed products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` or `CatalogError::EmptyName` if a
    /// product fails validation.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Parse and validate a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, otherwise the same
    /// errors as [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Borrow the products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consume the catalog, returning its products.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
