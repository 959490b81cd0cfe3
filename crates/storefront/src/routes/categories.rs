//! Category route handlers.

use std::collections::HashSet;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use vitrine_core::{CategoryId, ProductId};

use crate::error::Result;
use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub image: String,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: Vec<CategoryView>,
}

/// Category detail page template (products in one category).
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub name: String,
    pub cards: Vec<ProductCardView>,
}

/// Display the category listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state
        .catalog()
        .categories()
        .await?
        .iter()
        .map(|category| CategoryView {
            id: category.id.as_i64(),
            name: category.name.clone(),
            image: category.image.clone(),
        })
        .collect();

    Ok(CategoriesIndexTemplate { categories })
}

/// Display the products belonging to a category.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let id = CategoryId::new(id);
    let products = state.catalog().category_products(id).await?;

    // The per-category endpoint carries no category metadata of its own;
    // resolve the display name from the (cached) category list.
    let name = state
        .catalog()
        .categories()
        .await?
        .into_iter()
        .find(|category| category.id == id)
        .map_or_else(|| "Category".to_string(), |category| category.name);

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

    Ok(CategoryShowTemplate { name, cards })
}
