//! Product route handlers and card view building.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::IntoResponse,
};
use rand::Rng;
use serde::Deserialize;
use tracing::instrument;

use vitrine_core::{FavoriteEntry, ProductId, format_usd};

use crate::catalog::CatalogError;
use crate::catalog::types::Product;
use crate::error::{AppError, Result};
use crate::filters;
use crate::promo::Promo;
use crate::services::QuantityStepper;
use crate::state::AppState;

/// Max characters of description shown on a card.
const CARD_SUMMARY_CHARS: usize = 100;

/// Product card display data for templates.
///
/// Built per render: the discount/rating values are synthetic and drawn
/// fresh from the passed random source each time (never persisted).
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub price: String,
    pub original_price: String,
    pub savings: String,
    pub discount_percent: u32,
    pub rating: String,
    pub review_count: u32,
    pub image: String,
    pub is_favorite: bool,
}

impl ProductCardView {
    /// Build a card for a live catalog product.
    pub fn from_product(product: &Product, is_favorite: bool, rng: &mut impl Rng) -> Self {
        let promo = Promo::generate(rng, 50..250);
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            summary: summarize(&product.description),
            price: format_usd(product.price),
            original_price: format_usd(promo.original_price(product.price)),
            savings: format_usd(promo.savings(product.price)),
            discount_percent: promo.discount_percent,
            rating: format!("{:.1}", promo.rating),
            review_count: promo.review_count,
            image: product.primary_image().to_string(),
            is_favorite,
        }
    }

    /// Build a card from a stored favorites snapshot. Snapshots carry no
    /// description, so the summary is empty.
    pub fn from_favorite(entry: &FavoriteEntry, rng: &mut impl Rng) -> Self {
        let promo = Promo::generate(rng, 50..250);
        Self {
            id: entry.id.as_i64(),
            title: entry.title.clone(),
            summary: String::new(),
            price: format_usd(entry.price),
            original_price: format_usd(promo.original_price(entry.price)),
            savings: format_usd(promo.savings(entry.price)),
            discount_percent: promo.discount_percent,
            rating: format!("{:.1}", promo.rating),
            review_count: promo.review_count,
            image: entry.images.first().cloned().unwrap_or_default(),
            is_favorite: true,
        }
    }
}

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub price: String,
    pub original_price: String,
    pub savings: String,
    pub discount_percent: u32,
    pub rating: String,
    pub review_count: u32,
    pub images: Vec<String>,
    pub primary_image: String,
    pub is_favorite: bool,
}

impl ProductDetailView {
    /// Build the detail view for a live catalog product.
    pub fn build(product: &Product, is_favorite: bool, rng: &mut impl Rng) -> Self {
        let promo = Promo::generate(rng, 100..600);
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            description: product.description.clone(),
            category_name: product.category.name.clone(),
            price: format_usd(product.price),
            original_price: format_usd(promo.original_price(product.price)),
            savings: format_usd(promo.savings(product.price)),
            discount_percent: promo.discount_percent,
            rating: format!("{:.1}", promo.rating),
            review_count: promo.review_count,
            images: product.images.clone(),
            primary_image: product.primary_image().to_string(),
            is_favorite,
        }
    }
}

/// Truncate a description to card length, character-safe.
fn summarize(description: &str) -> String {
    let summary: String = description.chars().take(CARD_SUMMARY_CHARS).collect();
    if description.chars().count() > CARD_SUMMARY_CHARS {
        format!("{summary}...")
    } else {
        summary
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub quantity: u32,
}

/// Quantity stepper fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quantity.html")]
pub struct QuantityTemplate {
    pub id: i64,
    pub value: u32,
}

/// Quantity stepper form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub op: String,
    pub quantity: u32,
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let product = state.catalog().product(id).await.map_err(|e| match e {
        CatalogError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND => {
            AppError::NotFound(format!("product {id}"))
        }
        other => AppError::Catalog(other),
    })?;

    let is_favorite = state.favorites().is_favorite(id);
    let mut rng = rand::rng();
    let product = ProductDetailView::build(&product, is_favorite, &mut rng);

    Ok(ProductShowTemplate {
        product,
        quantity: QuantityStepper::new().value(),
    })
}

/// Step the detail-page quantity counter (HTMX).
///
/// The counter is transient display state: it touches no cart line until
/// an add operation consumes it.
#[instrument(skip(_state))]
pub async fn quantity(
    State(_state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<QuantityForm>,
) -> impl IntoResponse {
    let mut stepper = QuantityStepper::from_value(form.quantity);
    match form.op.as_str() {
        "increase" => stepper.increase(),
        "decrease" => stepper.decrease(),
        _ => {}
    }

    QuantityTemplate {
        id,
        value: stepper.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::dec;
    use vitrine_core::CategoryId;

    use crate::catalog::types::Category;

    fn product() -> Product {
        Product {
            id: ProductId::new(5),
            title: "Desk Lamp".to_string(),
            description: "d".repeat(150),
            price: dec!(40),
            images: vec!["https://img.example/a.jpg".to_string()],
            category: Category {
                id: CategoryId::new(2),
                name: "Lighting".to_string(),
                image: String::new(),
            },
        }
    }

    #[test]
    fn test_summarize_truncates_long_descriptions() {
        let summary = summarize(&"x".repeat(150));
        assert_eq!(summary.chars().count(), CARD_SUMMARY_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summarize_keeps_short_descriptions() {
        assert_eq!(summarize("short"), "short");
    }

    #[test]
    fn test_card_prices_are_formatted() {
        let mut rng = StdRng::seed_from_u64(1);
        let card = ProductCardView::from_product(&product(), false, &mut rng);
        assert_eq!(card.price, "$40.00");
        assert!(card.original_price.starts_with('$'));
        assert!(!card.is_favorite);
    }

    #[test]
    fn test_card_is_deterministic_for_a_seed() {
        let a = ProductCardView::from_product(&product(), false, &mut StdRng::seed_from_u64(3));
        let b = ProductCardView::from_product(&product(), false, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.discount_percent, b.discount_percent);
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.review_count, b.review_count);
    }

    #[test]
    fn test_favorite_card_has_no_summary() {
        let entry = FavoriteEntry {
            id: ProductId::new(5),
            title: "Desk Lamp".to_string(),
            price: dec!(40),
            images: vec![],
        };
        let card = ProductCardView::from_favorite(&entry, &mut StdRng::seed_from_u64(1));
        assert!(card.summary.is_empty());
        assert!(card.is_favorite);
        assert_eq!(card.image, "");
    }
}
