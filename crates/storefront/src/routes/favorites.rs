//! Favorites route handlers.
//!
//! Toggle responses carry an `HX-Trigger: favorites-updated` header; the
//! favorites page listens for it and refreshes its grid, and the nav
//! badge refreshes everywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use vitrine_core::ProductId;

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::ToastTemplate;
use crate::routes::products::ProductCardView;
use crate::services::ToggleOutcome;
use crate::state::AppState;

/// Toggle favorite form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub product_id: i64,
}

/// Favorites page template.
#[derive(Template, WebTemplate)]
#[template(path = "favorites/show.html")]
pub struct FavoritesShowTemplate {
    pub cards: Vec<ProductCardView>,
}

/// Favorites grid fragment template (for HTMX refresh).
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorites_grid.html")]
pub struct FavoritesGridTemplate {
    pub cards: Vec<ProductCardView>,
}

/// Favorite heart button fragment template (for HTMX swap on cards).
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_button.html")]
pub struct FavoriteButtonTemplate {
    pub id: i64,
    pub is_favorite: bool,
}

/// Favorites count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/fav_count.html")]
pub struct FavCountTemplate {
    pub count: usize,
}

/// Build cards from the stored snapshots.
fn snapshot_cards(state: &AppState) -> Vec<ProductCardView> {
    let mut rng = rand::rng();
    state
        .favorites()
        .favorites()
        .iter()
        .map(|entry| ProductCardView::from_favorite(entry, &mut rng))
        .collect()
}

/// Display favorites page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    FavoritesShowTemplate {
        cards: snapshot_cards(&state),
    }
}

/// Favorites grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    FavoritesGridTemplate {
        cards: snapshot_cards(&state),
    }
}

/// Toggle a product's favorite membership (HTMX).
///
/// Returns the heart button fragment for the card that was clicked, with
/// an out-of-band toast naming the outcome.
///
/// Only the add path fetches the product (the snapshot needs its catalog
/// fields); removal works from the stored id alone, so unfavoriting never
/// depends on the product still existing upstream.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>, Form(form): Form<ToggleForm>) -> Result<Response> {
    let id = ProductId::new(form.product_id);

    let outcome = if state.favorites().is_favorite(id) {
        state.favorites().remove(id)?;
        ToggleOutcome::Removed
    } else {
        let product = state.catalog().product(id).await?;
        state.favorites().toggle(&product)?
    };

    let (is_favorite, toast) = match outcome {
        ToggleOutcome::Added => (true, ToastTemplate::success("Added to favorites!")),
        ToggleOutcome::Removed => (false, ToastTemplate::info("Removed from favorites")),
    };

    let button = FavoriteButtonTemplate {
        id: form.product_id,
        is_favorite,
    }
    .render()
    .map_err(AppError::Template)?;
    let toast = toast.render().map_err(AppError::Template)?;

    Ok((
        AppendHeaders([("HX-Trigger", "favorites-updated")]),
        Html(format!("{button}{toast}")),
    )
        .into_response())
}

/// Get favorites count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    FavCountTemplate {
        count: state.favorites().count(),
    }
}
