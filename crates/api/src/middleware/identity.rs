//! Caller identity extractor.
//!
//! The caller names themselves with the `x-user-id` header. The value is not
//! a token: it is trusted outright as long as it is exactly the ID of a
//! registered user.

use axum::{extract::FromRequestParts, http::request::Parts};

use minishop_core::UserId;

use crate::error::AppError;
use crate::services::AuthService;
use crate::state::AppState;

/// The HTTP header carrying the caller's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a known caller.
///
/// Rejects with 401 when the header is missing or empty, and with 404 when
/// it does not name a registered user. Place it before other extractors so
/// identity failures are reported first.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user_id): RequireUser) -> String {
///     format!("Hello, {user_id}!")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Non-visible-ASCII header values cannot name a generated ID.
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(UserId::from)
            .ok_or_else(|| AppError::Unauthorized("Unauthorized. Invalid x-user-id.".to_string()))?;

        let user = AuthService::new(state.store())
            .resolve(&user_id)
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        tracing::Span::current().record("user_id", user.id.as_str());
        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user.id.to_string()),
                email: Some(user.email.to_string()),
                ..Default::default()
            }));
        });

        Ok(Self(user.id))
    }
}
