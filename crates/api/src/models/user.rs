//! User domain type.

use secrecy::SecretString;

use minishop_core::{Email, Password, UserId};

/// A registered shop user.
///
/// The password is kept as entered (no hashing); `SecretString` only keeps it
/// out of logs and `Debug` output. Users are never serialized directly.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID v4 string).
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// User's password, as registered.
    pub password: SecretString,
}

impl User {
    /// Create a user with a freshly generated ID.
    #[must_use]
    pub fn new(email: Email, password: Password) -> Self {
        Self {
            id: UserId::generate(),
            email,
            password: SecretString::from(password.into_inner()),
        }
    }
}
