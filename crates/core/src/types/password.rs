//! Password complexity rules.
//!
//! Passwords are kept as plain text (there is no hashing in this system); the
//! [`Password`] wrapper only guarantees that the complexity rules hold and
//! keeps the value out of `Debug` output.

use core::fmt;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols accepted in passwords. At least one is required.
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Errors that can occur when parsing a [`Password`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The password contains a character outside letters, digits and symbols.
    #[error("password contains a disallowed character")]
    DisallowedCharacter,
    /// No lowercase letter.
    #[error("password must contain a lowercase letter")]
    MissingLowercase,
    /// No uppercase letter.
    #[error("password must contain an uppercase letter")]
    MissingUppercase,
    /// No digit.
    #[error("password must contain a digit")]
    MissingDigit,
    /// None of `! @ # $ % ^ & *`.
    #[error("password must contain one of ! @ # $ % ^ & *")]
    MissingSymbol,
}

/// Check whether a string satisfies the password complexity rules.
///
/// ```
/// use minishop_core::validate_password;
///
/// assert!(validate_password("Valid1Pass!"));
/// assert!(!validate_password("short1!"));
/// ```
#[must_use]
pub fn validate_password(s: &str) -> bool {
    check(s).is_ok()
}

/// A password that satisfies the complexity rules.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Parse a `Password`, reporting the first rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns a [`PasswordError`] naming the failed rule.
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        check(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Password` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

fn check(s: &str) -> Result<(), PasswordError> {
    if s.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c))
    {
        return Err(PasswordError::DisallowedCharacter);
    }

    if !s.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !s.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !s.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)) {
        return Err(PasswordError::MissingSymbol);
    }

    Ok(())
}
