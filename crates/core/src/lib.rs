//! Minishop Core - Shared types library.
//!
//! This crate provides common types used across all Minishop components:
//! - `api` - The HTTP/JSON shop backend
//! - `cli` - Command-line tools for catalog management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no global state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails and passwords
//! - [`catalog`] - Parsing and validation of product catalogs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::*;
