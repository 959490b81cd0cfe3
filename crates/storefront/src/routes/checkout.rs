//! Checkout route handlers.
//!
//! There is no payment integration: "placing the order" deletes the
//! persisted cart and shows a confirmation page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Order summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub cart: CartView,
}

/// Order placed page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate;

/// Display the order summary. An empty cart has nothing to check out;
/// send the user back to the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Response {
    let lines = state.cart().cart();
    if lines.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutShowTemplate {
        cart: CartView::build(&lines),
    }
    .into_response()
}

/// Complete the order: delete the persisted cart and show the
/// confirmation page.
#[instrument(skip(state))]
pub async fn complete(State(state): State<AppState>) -> Result<Redirect> {
    state.cart().clear()?;
    Ok(Redirect::to("/checkout/success"))
}

/// Display the order placed page.
#[instrument]
pub async fn success() -> impl IntoResponse {
    CheckoutSuccessTemplate
}
