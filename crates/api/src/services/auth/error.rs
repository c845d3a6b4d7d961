//! Registration error types.

use thiserror::Error;

/// Errors that can occur while registering a user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing (or empty).
    #[error("email and password are required")]
    MissingCredentials,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] minishop_core::EmailError),

    /// Password does not meet the complexity rules.
    #[error("password validation failed: {0}")]
    WeakPassword(#[from] minishop_core::PasswordError),
}
