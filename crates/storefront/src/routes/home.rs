//! Home page route handler: the full product grid.

use std::collections::HashSet;

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use vitrine_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub cards: Vec<ProductCardView>,
}

/// Display the home page product grid.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = state.catalog().products().await?;
    let favorites: HashSet<ProductId> = state
        .favorites()
        .favorites()
        .iter()
        .map(|entry| entry.id)
        .collect();

    let mut rng = rand::rng();
    let cards = products
        .iter()
        .map(|product| {
            ProductCardView::from_product(product, favorites.contains(&product.id), &mut rng)
        })
        .collect();

    Ok(HomeTemplate { cards })
}
