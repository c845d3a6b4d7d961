//! HTTP middleware and extractors.
//!
//! # Layer Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction per request)
//! 2. `SetRequestIdLayer` (keep an upstream `x-request-id` or generate a UUID)
//! 3. `PropagateRequestIdLayer` (echo the request ID on the response)
//! 4. `TraceLayer` (`http_request` span with method, uri, request ID, status,
//!    latency)
//! 5. Panic catcher (turns handler panics into the 500 error envelope)
//!
//! Identity is not a layer: handlers that need a caller opt in by taking the
//! [`RequireUser`] extractor.

pub mod identity;

pub use identity::{RequireUser, USER_ID_HEADER};

/// The HTTP header carrying the per-request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
