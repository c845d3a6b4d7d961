//! Integration tests for Minishop.
//!
//! Each test starts its own server on an ephemeral port with a fresh
//! in-memory store, then talks to it over real HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p minishop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_flow` - Registration, catalog, cart and checkout
//! - `identity` - `x-user-id` handling
//! - `concurrency` - Parallel cart mutations

use std::net::SocketAddr;

use minishop_api::state::AppState;
use minishop_core::Catalog;
use reqwest::{Client, Response};
use serde_json::{Value, json};

/// A running server plus a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a server backed by the built-in default catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn new() -> Self {
        let catalog = minishop_api::catalog::load(None)
            .await
            .expect("Failed to load default catalog");
        Self::with_catalog(catalog).await
    }

    /// Start a server backed by the given catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr: SocketAddr = listener.local_addr().expect("Failed to read local addr");

        let app = minishop_api::app(AppState::with_catalog(catalog));
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Build an absolute URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a user with a valid password and return their ID.
    ///
    /// # Panics
    ///
    /// Panics if registration does not succeed.
    pub async fn register(&self, email: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/register"))
            .json(&json!({ "email": email, "password": "Valid1Pass!" }))
            .send()
            .await
            .expect("Failed to send register request");
        assert!(resp.status().is_success(), "register failed: {}", resp.status());

        let body: Value = resp.json().await.expect("Failed to parse register response");
        body["id"]
            .as_str()
            .expect("register response has no id")
            .to_string()
    }

    /// Send a request as the given user.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn as_user(&self, method: reqwest::Method, path: &str, user_id: &str) -> Response {
        self.client
            .request(method, self.url(path))
            .header(minishop_api::middleware::USER_ID_HEADER, user_id)
            .send()
            .await
            .expect("Failed to send request")
    }
}
