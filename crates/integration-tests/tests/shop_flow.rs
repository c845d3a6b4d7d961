//! End-to-end shopping flow over HTTP against the default catalog.

#![allow(clippy::unwrap_used)]

use minishop_integration_tests::TestContext;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_catalog_is_served() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/api/products")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Value = resp.json().await.unwrap();
    assert_eq!(products.as_array().unwrap().len(), 4);

    let resp = ctx
        .client
        .get(ctx.url("/api/products/2"))
        .send()
        .await
        .unwrap();
    let product: Value = resp.json().await.unwrap();
    assert_eq!(product["name"], "Pour-Over Kettle");
    assert_eq!(product["price"], 49.5);
}

#[tokio::test]
async fn test_numeric_ids_match_loosely() {
    let ctx = TestContext::new().await;

    for path in [
        "/api/products/1",
        "/api/products/1.0",
        "/api/products/%201",
        "/api/products/0x1",
        "/api/products/%EF%BB%BF1",
    ] {
        let resp = ctx.client.get(ctx.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }

    let resp = ctx
        .client
        .get(ctx.url("/api/products/one"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Product not found." })
    );
}

#[tokio::test]
async fn test_register_cart_checkout() {
    let ctx = TestContext::new().await;
    let user = ctx.register("shopper@example.com").await;

    ctx.as_user(Method::PUT, "/api/cart/1", &user).await;
    ctx.as_user(Method::PUT, "/api/cart/4", &user).await;
    let resp = ctx.as_user(Method::PUT, "/api/cart/4", &user).await;
    let cart: Value = resp.json().await.unwrap();
    assert_eq!(cart["products"].as_array().unwrap().len(), 3);

    let resp = ctx.as_user(Method::DELETE, "/api/cart/4", &user).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.unwrap();
    assert_eq!(cart["products"].as_array().unwrap().len(), 1);

    ctx.as_user(Method::PUT, "/api/cart/4", &user).await;
    let resp = ctx.as_user(Method::POST, "/api/cart/checkout", &user).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order["totalPrice"], 17);
    assert_eq!(order["userId"], user.as_str());

    let resp = ctx.as_user(Method::GET, "/api/cart", &user).await;
    let cart: Value = resp.json().await.unwrap();
    assert_eq!(cart["products"], json!([]));

    let resp = ctx.as_user(Method::GET, "/api/orders", &user).await;
    let orders: Value = resp.json().await.unwrap();
    assert_eq!(orders, json!([order]));
}

#[tokio::test]
async fn test_fractional_total() {
    let ctx = TestContext::new().await;
    let user = ctx.register("shopper@example.com").await;

    ctx.as_user(Method::PUT, "/api/cart/2", &user).await;
    ctx.as_user(Method::PUT, "/api/cart/3", &user).await;
    let resp = ctx.as_user(Method::POST, "/api/cart/checkout", &user).await;
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order["totalPrice"], 68.25);
}

#[tokio::test]
async fn test_empty_checkout_is_rejected() {
    let ctx = TestContext::new().await;
    let user = ctx.register("shopper@example.com").await;

    let resp = ctx.as_user(Method::POST, "/api/cart/checkout", &user).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Cart is empty or not found.");
}

#[tokio::test]
async fn test_register_validation() {
    let ctx = TestContext::new().await;

    let cases = [
        (json!({}), "Email and password are required."),
        (
            json!({ "email": "", "password": "Valid1Pass!" }),
            "Email and password are required.",
        ),
        (
            json!({ "email": "nope", "password": "Valid1Pass!" }),
            "Invalid email format.",
        ),
        (
            json!({ "email": "a@b.co", "password": "alllowercase1!" }),
            "Password does not meet complexity requirements.",
        ),
    ];

    for (body, message) in cases {
        let resp = ctx
            .client
            .post(ctx.url("/api/register"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let err: Value = resp.json().await.unwrap();
        assert_eq!(err, json!({ "status": "error", "message": message }));
    }
}

#[tokio::test]
async fn test_checkout_segment_acts_as_product_id_for_put_and_delete() {
    let ctx = TestContext::new().await;
    let user = ctx.register("shopper@example.com").await;

    let resp = ctx.as_user(Method::PUT, "/api/cart/checkout", &user).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Product not found.");

    ctx.as_user(Method::PUT, "/api/cart/1", &user).await;
    let resp = ctx.as_user(Method::DELETE, "/api/cart/checkout", &user).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.unwrap();
    assert_eq!(cart["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_without_body() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .post(ctx.url("/api/register"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Email and password are required.");
}
