//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Shoe grid (?sort=newest|price)
//! GET  /shoe/{slug}            - Shoe detail (card navigation target)
//! GET  /shoe/{slug}/card       - Single card fragment
//! GET  /theme.css              - Palette stylesheet
//! GET  /health                 - Health check (registered in `app`)
//! ```

pub mod shoes;
pub mod theme;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the shoe routes router.
pub fn shoe_routes() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(shoes::show))
        .route("/{slug}/card", get(shoes::card))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shoes::index))
        .nest("/shoe", shoe_routes())
        .route("/theme.css", get(theme::stylesheet))
}
