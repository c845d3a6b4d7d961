//! `x-user-id` handling over HTTP.

#![allow(clippy::unwrap_used)]

use minishop_integration_tests::TestContext;
use reqwest::{Method, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let ctx = TestContext::new().await;

    for (method, path) in [
        (Method::GET, "/api/cart"),
        (Method::PUT, "/api/cart/1"),
        (Method::DELETE, "/api/cart/1"),
        (Method::POST, "/api/cart/checkout"),
        (Method::GET, "/api/orders"),
    ] {
        let resp = ctx
            .client
            .request(method, ctx.url(path))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["message"], "Unauthorized. Invalid x-user-id.");
    }
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let ctx = TestContext::new().await;
    let resp = ctx.as_user(Method::PUT, "/api/cart/1", "not-a-user").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn test_user_ids_match_exactly() {
    let ctx = TestContext::new().await;
    let user = ctx.register("shopper@example.com").await;

    let resp = ctx
        .as_user(Method::GET, "/api/orders", &user.to_uppercase())
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = ctx.as_user(Method::GET, "/api/orders", &user).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_carts_are_isolated() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice@example.com").await;
    let bob = ctx.register("bob@example.com").await;

    ctx.as_user(Method::PUT, "/api/cart/1", &alice).await;

    let resp = ctx.as_user(Method::GET, "/api/cart", &bob).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Cart not found.");
}
