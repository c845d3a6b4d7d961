//! Registration route handler.

use std::borrow::Cow;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use minishop_core::{Email, UserId};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
///
/// Fields are kept as raw JSON so that a missing or wrongly typed field is
/// reported with a registration error rather than as a JSON error.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

/// Registration response: the new user's ID and email, never the password.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: Email,
}

/// Register a new user.
#[instrument(skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<RegisteredUser>> {
    let email = credential_text(request.email.as_ref());
    let password = credential_text(request.password.as_ref());

    let user = AuthService::new(state.store()).register(email.as_deref(), password.as_deref())?;

    Ok(Json(RegisteredUser {
        id: user.id,
        email: user.email,
    }))
}

/// Read a credential field loosely.
///
/// `null`, `false` and zero count as missing. Other non-string values are
/// validated by their text form, which never passes the password rules.
fn credential_text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}
