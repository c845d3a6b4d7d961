//! In-memory storage for the shop.
//!
//! # Collections
//!
//! - `products` - The catalog, fixed at startup
//! - `users` - Registered users (append-only)
//! - `carts` - One cart per user, created lazily, emptied at checkout
//! - `orders` - Checkout snapshots (append-only)
//!
//! Nothing is persisted: a restart starts from the catalog with no users,
//! carts or orders. Lookups are linear scans in insertion order.
//!
//! Access goes through the repository types, which borrow a [`Store`]. Each
//! repository method takes its collection's lock once, so a read-modify-write
//! such as "find or create the cart, then append" is atomic per request.

pub mod carts;
pub mod orders;
pub mod products;
pub mod users;

use parking_lot::{Mutex, RwLock};

use minishop_core::{Catalog, Product};

use crate::models::{Cart, Order, User};

pub use carts::CartRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// The process-wide collections, owned by the application state.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    users: RwLock<Vec<User>>,
    carts: Mutex<Vec<Cart>>,
    orders: RwLock<Vec<Order>>,
}

impl Store {
    /// Create a store whose product collection is the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            products: catalog.into_products(),
            ..Self::default()
        }
    }

    /// Product catalog access.
    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// User access.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    /// Cart access.
    #[must_use]
    pub const fn carts(&self) -> CartRepository<'_> {
        CartRepository::new(self)
    }

    /// Order access.
    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(self)
    }
}
