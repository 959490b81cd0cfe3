//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (product grid)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products/{id}          - Product detail
//! POST /products/{id}/quantity - Quantity stepper fragment (HTMX)
//!
//! # Categories
//! GET  /categories             - Category listing
//! GET  /categories/{id}        - Products in a category
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (toast + cart-updated trigger)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/buy-now           - Replace cart, redirect to checkout
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Favorites (HTMX fragments)
//! GET  /favorites              - Favorites page
//! GET  /favorites/grid         - Favorites grid (fragment)
//! POST /favorites/toggle       - Toggle membership
//! GET  /favorites/count        - Favorites count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Order summary (redirects to /cart when empty)
//! POST /checkout/complete      - Clear cart, redirect to success
//! GET  /checkout/success       - Order placed page
//! ```

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod favorites;
pub mod home;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Transient notification banner fragment.
///
/// Rendered out-of-band so mutator responses can refresh the banner no
/// matter what their primary swap target is.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
    pub kind: String,
}

impl ToastTemplate {
    /// Success-styled toast.
    #[must_use]
    pub fn success(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: "success".to_string(),
        }
    }

    /// Info-styled toast.
    #[must_use]
    pub fn info(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: "info".to_string(),
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/quantity", post(products::quantity))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{id}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/buy-now", post(cart::buy_now))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::show))
        .route("/grid", get(favorites::grid))
        .route("/toggle", post(favorites::toggle))
        .route("/count", get(favorites::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/complete", post(checkout::complete))
        .route("/success", get(checkout::success))
}

/// Assemble all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .nest("/checkout", checkout_routes())
}
