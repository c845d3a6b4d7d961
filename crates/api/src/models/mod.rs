//! Domain models for the shop.
//!
//! Products are defined in `minishop_core` because the catalog parser needs
//! them; everything created at runtime lives here.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::Cart;
pub use order::Order;
pub use user::User;
