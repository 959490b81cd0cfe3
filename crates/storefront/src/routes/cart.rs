//! Cart route handlers.
//!
//! Cart mutations use HTMX for dynamic updates without full page reloads.
//! Every mutator response carries an `HX-Trigger: cart-updated` header so
//! the nav badge (and any other listener) refreshes before the next
//! interaction, plus an out-of-band toast fragment for the notification
//! banner.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use vitrine_core::{CartLine, ProductId, cart_total, format_usd, item_count};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::ToastTemplate;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    /// Build the display cart from the persisted lines.
    #[must_use]
    pub fn build(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            total: format_usd(cart_total(lines)),
            count: item_count(lines),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.as_i64(),
            title: line.title.clone(),
            image: line.images.first().cloned().unwrap_or_default(),
            price: format_usd(line.price),
            quantity: line.quantity,
            line_total: format_usd(line.line_total()),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i64,
}

/// Buy now form data.
#[derive(Debug, Deserialize)]
pub struct BuyNowForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::build(&state.cart().cart()),
    }
}

/// Add item to cart (HTMX).
///
/// Fetches the product from the catalog so the stored line snapshots the
/// catalog fields as they are right now.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let product = state
        .catalog()
        .product(ProductId::new(form.product_id))
        .await?;
    let quantity = form.quantity.unwrap_or(1);
    state.cart().add(&product, quantity)?;

    let message = if quantity > 1 {
        format!("{quantity} items added to cart!")
    } else {
        "Added to cart!".to_string()
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        ToastTemplate::success(&message),
    )
        .into_response())
}

/// Remove item from cart (HTMX).
///
/// Returns the cart items fragment so the cart page re-renders in place.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let lines = state.cart().remove(ProductId::new(form.product_id))?;

    let items = CartItemsTemplate {
        cart: CartView::build(&lines),
    }
    .render()
    .map_err(AppError::Template)?;
    let toast = ToastTemplate::info("Removed from cart")
        .render()
        .map_err(AppError::Template)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        Html(format!("{items}{toast}")),
    )
        .into_response())
}

/// Express checkout (HTMX): discard the cart, keep only this product,
/// and send the client to the checkout page.
#[instrument(skip(state))]
pub async fn buy_now(
    State(state): State<AppState>,
    Form(form): Form<BuyNowForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .product(ProductId::new(form.product_id))
        .await?;
    state
        .cart()
        .replace_with(&product, form.quantity.unwrap_or(1))?;

    Ok((AppendHeaders([("HX-Redirect", "/checkout")]), ()).into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn line(id: i64, price: rust_decimal::Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            images: vec![format!("https://img.example/{id}.jpg")],
            quantity,
        }
    }

    #[test]
    fn test_cart_view_totals() {
        let view = CartView::build(&[line(1, dec!(10), 2), line(2, dec!(5.50), 1)]);
        assert_eq!(view.total, "$25.50");
        assert_eq!(view.count, 3);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_cart_view_empty() {
        let view = CartView::build(&[]);
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.count, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_cart_item_view_line_total() {
        let view = CartItemView::from(&line(1, dec!(3.25), 3));
        assert_eq!(view.price, "$3.25");
        assert_eq!(view.line_total, "$9.75");
    }
}
