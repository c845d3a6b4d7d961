//! Application state shared across handlers.

use std::sync::Arc;

use minishop_core::Catalog;

use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives handlers access to
/// the in-memory store. Every `AppState` owns its own store, so tests get
/// full isolation by building a fresh state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
}

impl AppState {
    /// Create a new application state around a store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Create a state whose store starts from the given catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(Store::new(catalog))
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}
