//! Theme stylesheet route.

use askama::Template;
use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::Result;
use crate::state::AppState;

/// Serve the palette as CSS custom properties.
pub async fn stylesheet(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let css = state.theme().stylesheet().render()?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
