//! Shoe listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use sole_core::{Shoe, Slug};
use tracing::instrument;

use crate::catalog::SortOrder;
use crate::components::ShoeCard;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub sort: Option<String>,
}

/// Shoe listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/index.html")]
pub struct ShoesIndexTemplate {
    /// Pre-rendered card markup, in listing order.
    pub cards: Vec<String>,
    pub sort: SortOrder,
}

/// Shoe detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/show.html")]
pub struct ShoeShowTemplate {
    pub card: ShoeCard,
    pub released: String,
}

/// Display the shoe grid.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<ShoesIndexTemplate> {
    let sort = query
        .sort
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(AppError::BadRequest)?
        .unwrap_or_default();

    let now = state.now();
    let cards = state
        .catalog()
        .sorted(sort)
        .into_iter()
        .map(|shoe| ShoeCard::new(shoe, now).render())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(count = cards.len(), sort = sort.as_str(), "Rendered shoe grid");

    Ok(ShoesIndexTemplate { cards, sort })
}

/// Display the detail page a card links to.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ShoeShowTemplate> {
    let shoe = find_shoe(&state, &slug)?;
    add_breadcrumb("navigation", "Viewed shoe page", Some(&[("slug", slug.as_str())]));

    Ok(ShoeShowTemplate {
        card: ShoeCard::new(shoe, state.now()),
        released: shoe.release_date.format("%B %-d, %Y").to_string(),
    })
}

/// Render a single card as an HTML fragment.
#[instrument(skip(state))]
pub async fn card(State(state): State<AppState>, Path(slug): Path<String>) -> Result<ShoeCard> {
    let shoe = find_shoe(&state, &slug)?;
    Ok(ShoeCard::new(shoe, state.now()))
}

/// Look up a shoe, treating malformed slugs as unknown.
fn find_shoe<'a>(state: &'a AppState, slug: &str) -> Result<&'a Shoe> {
    Slug::parse(slug)
        .ok()
        .and_then(|slug| state.catalog().get(slug.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("shoe {slug}")))
}
