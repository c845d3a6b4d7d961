//! User repository.

use minishop_core::UserId;

use super::Store;
use crate::models::User;

/// Repository for registered users.
pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Append a new user.
    pub fn create(&self, user: User) -> User {
        self.store.users.write().push(user.clone());
        user
    }

    /// Get a user by exact ID.
    #[must_use]
    pub fn get_by_id(&self, id: &UserId) -> Option<User> {
        self.store
            .users
            .read()
            .iter()
            .find(|user| &user.id == id)
            .cloned()
    }

    /// Number of registered users.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.users.read().len()
    }
}
