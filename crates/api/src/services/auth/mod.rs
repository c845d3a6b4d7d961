//! Registration and identity resolution.
//!
//! There is no login step: callers identify themselves by sending their user
//! ID in the `x-user-id` header, which is trusted as-is when it names an
//! existing user.

mod error;

pub use error::AuthError;

use minishop_core::{Email, Password, UserId};

use crate::models::User;
use crate::store::{Store, UserRepository};

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Register a new user with email and password.
    ///
    /// Empty strings count as missing. Emails are not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is missing.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    pub fn register(&self, email: Option<&str>, password: Option<&str>) -> Result<User, AuthError> {
        let (Some(email), Some(password)) = (
            email.filter(|s| !s.is_empty()),
            password.filter(|s| !s.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials);
        };

        let email = Email::parse(email)?;
        let password = Password::parse(password)?;

        let user = self.users.create(User::new(email, password));
        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Resolve a caller-supplied ID to a registered user.
    ///
    /// Comparison is exact; no normalization is applied to the ID.
    #[must_use]
    pub fn resolve(&self, user_id: &UserId) -> Option<User> {
        self.users.get_by_id(user_id)
    }
}
