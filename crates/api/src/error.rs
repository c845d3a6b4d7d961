//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. `AppError`'s `IntoResponse`
//! impl is the single place where failures are logged and turned into the
//! JSON error envelope:
//!
//! ```json
//! { "status": "error", "message": "Product not found." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::cart::CartError;

/// Message used for any failure that is not the client's fault.
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration failed validation.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A cart operation could not be carried out.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller did not identify themselves.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

impl AppError {
    /// HTTP status code carried by this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Cart(err) => match err {
                CartError::ProductNotFound | CartError::CartNotFound => StatusCode::NOT_FOUND,
                CartError::EmptyCart => StatusCode::BAD_REQUEST,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details are never exposed.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(err) => match err {
                AuthError::MissingCredentials => "Email and password are required.",
                AuthError::InvalidEmail(_) => "Invalid email format.",
                AuthError::WeakPassword(_) => "Password does not meet complexity requirements.",
            },
            Self::Cart(err) => match err {
                CartError::ProductNotFound => "Product not found.",
                CartError::CartNotFound => "Cart not found.",
                CartError::EmptyCart => "Cart is empty or not found.",
            },
            Self::NotFound(msg) | Self::Unauthorized(msg) | Self::BadRequest(msg) => msg,
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            status: "error",
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use minishop_core::{EmailError, PasswordError};
    use serde_json::{Value, json};

    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product not found.".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found.");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AuthError::WeakPassword(PasswordError::MissingDigit).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(CartError::CartNotFound.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(CartError::EmptyCart.into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let (status, body) = body_json(AppError::Unauthorized(
            "Unauthorized. Invalid x-user-id.".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "status": "error", "message": "Unauthorized. Invalid x-user-id." })
        );
    }

    #[tokio::test]
    async fn test_service_error_messages() {
        let (_, body) = body_json(AuthError::InvalidEmail(EmailError::InvalidFormat).into()).await;
        assert_eq!(body["message"], "Invalid email format.");

        let (_, body) = body_json(CartError::EmptyCart.into()).await;
        assert_eq!(body["message"], "Cart is empty or not found.");
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let (status, body) = body_json(AppError::Internal("lock poisoned".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
    }
}
