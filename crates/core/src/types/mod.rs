//! Core types for Minishop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod password;
pub mod price;
pub mod product;

pub use email::{Email, EmailError, validate_email};
pub use id::*;
pub use password::{Password, PasswordError, validate_password};
pub use price::{Price, PriceError};
pub use product::Product;
