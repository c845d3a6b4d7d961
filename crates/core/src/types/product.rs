//! Catalog product type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Price, ProductId};

/// A product as listed in the catalog.
///
/// Only `id`, `name` and `price` are interpreted. Any other attributes found
/// in the catalog (descriptions, image URLs, ...) are kept in `extra` and
/// serialized back alongside the known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Additional catalog attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product without extra attributes.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            extra: Map::new(),
        }
    }
}
