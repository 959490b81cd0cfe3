//! Integration tests for the storefront routes.
//!
//! These exercise the router against an in-memory state store, so no
//! catalog API or filesystem is needed. Routes that fetch catalog data
//! before responding (home, product pages, cart add) are covered by the
//! manager unit tests instead.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rust_decimal::dec;

use vitrine_core::{CategoryId, ProductId};
use vitrine_storefront::catalog::types::{Category, Product};
use vitrine_storefront::config::{CatalogConfig, DEFAULT_API_BASE, StorefrontConfig};
use vitrine_storefront::routes;
use vitrine_storefront::state::AppState;

/// Application state over an in-memory store, for seeding test data.
fn test_state() -> AppState {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        data_dir: ":memory:".to_string(),
        catalog: CatalogConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl_secs: 300,
        },
    };
    AppState::new(config).expect("in-memory store never fails to build")
}

/// Build the storefront router over `state`, mirroring the server
/// assembly in `main`.
fn app_with(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(routes::routes())
        .with_state(state)
}

fn test_app() -> Router {
    app_with(test_state())
}

async fn body_string(body: Body) -> String {
    let bytes = BodyExt::collect(body)
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(get_request("/health"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "ok");
}

#[tokio::test]
async fn test_cart_page_shows_empty_state() {
    let response = test_app()
        .oneshot(get_request("/cart"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Your Cart"));
    assert!(body.contains("empty"));
}

#[tokio::test]
async fn test_cart_count_badge_starts_at_zero() {
    let response = test_app()
        .oneshot(get_request("/cart/count"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains('0'));
}

#[tokio::test]
async fn test_favorites_page_shows_empty_state() {
    let response = test_app()
        .oneshot(get_request("/favorites"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Your Favorites"));
}

#[tokio::test]
async fn test_favorites_count_badge_starts_at_zero() {
    let response = test_app()
        .oneshot(get_request("/favorites/count"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains('0'));
}

#[tokio::test]
async fn test_checkout_redirects_to_cart_when_empty() {
    let response = test_app()
        .oneshot(get_request("/checkout"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/cart")
    );
}

#[tokio::test]
async fn test_checkout_complete_redirects_to_success() {
    let response = test_app()
        .oneshot(form_post("/checkout/complete", ""))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/checkout/success")
    );
}

#[tokio::test]
async fn test_checkout_success_page() {
    let response = test_app()
        .oneshot(get_request("/checkout/success"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Order placed successfully"));
}

#[tokio::test]
async fn test_cart_remove_is_idempotent_on_empty_cart() {
    let response = test_app()
        .oneshot(form_post("/cart/remove", "product_id=42"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let body = body_string(response.into_body()).await;
    assert!(body.contains("empty"));
    assert!(body.contains("Removed from cart"));
}

#[tokio::test]
async fn test_unfavorite_works_without_catalog_lookup() {
    let state = test_state();
    let product = Product {
        id: ProductId::new(5),
        title: "Desk Lamp".to_string(),
        price: dec!(40),
        description: String::new(),
        images: vec!["https://img.example/lamp.jpg".to_string()],
        category: Category {
            id: CategoryId::new(2),
            name: "Lighting".to_string(),
            image: String::new(),
        },
    };
    state.favorites().toggle(&product).expect("seed favorite");

    // The removal path must not hit the catalog API: the product may no
    // longer exist upstream, and this test has no network.
    let response = app_with(state.clone())
        .oneshot(form_post("/favorites/toggle", "product_id=5"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("favorites-updated")
    );
    assert!(!state.favorites().is_favorite(ProductId::new(5)));
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Removed from favorites"));
}

#[tokio::test]
async fn test_favorites_grid_fragment_renders_empty() {
    let response = test_app()
        .oneshot(get_request("/favorites/grid"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_quantity_stepper_increments() {
    let response = test_app()
        .oneshot(form_post("/products/7/quantity", "op=increase&quantity=2"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("value=\"3\""));
}

#[tokio::test]
async fn test_quantity_stepper_floors_at_one() {
    let response = test_app()
        .oneshot(form_post("/products/7/quantity", "op=decrease&quantity=1"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("value=\"1\""));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = test_app()
        .oneshot(get_request("/no-such-page"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
