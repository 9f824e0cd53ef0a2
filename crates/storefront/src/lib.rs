//! Sole & Ankle Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod theme;

use axum::{Router, extract::Request, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use catalog::{Catalog, CatalogError, SortOrder};
pub use components::{ShoeCard, render_card};
pub use config::StorefrontConfig;
pub use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary so tests run without a client.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{TimeZone, Utc};
    use sole_core::FixedClock;
    use tower::ServiceExt;

    use super::*;

    const CATALOG: &str = r#"[
        {"slug": "tail-twister", "name": "Tail Twister", "imageSrc": "/assets/tail-twister.jpg",
         "price": 10000, "salePrice": 7500, "releaseDate": "2022-01-01T00:00:00Z", "numOfColors": 1},
        {"slug": "hi-tops", "name": "Hi-Tops", "imageSrc": "/assets/hi-tops.jpg",
         "price": 12000, "releaseDate": "2024-05-22T12:00:00Z", "numOfColors": 3},
        {"slug": "classic", "name": "Classic", "imageSrc": "/assets/classic.jpg",
         "price": 9000, "releaseDate": "2022-06-01T00:00:00Z", "numOfColors": 2}
    ]"#;

    fn test_state() -> AppState {
        let config = StorefrontConfig::from_vars(|_| None).unwrap();
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        AppState::with_clock(config, catalog, FixedClock(now))
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn should_render_every_card_on_listing() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"<a class="shoe-card""#).count(), 3);
        assert!(body.contains(">Sale</span>"));
        assert!(body.contains(">Just Released!</span>"));
    }

    #[tokio::test]
    async fn should_reject_unknown_sort() {
        let (status, _) = get("/?sort=cheapest").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_shoe() {
        let (status, _) = get("/shoe/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get("/shoe/NOT%20A%20SLUG/card").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_set_security_headers() {
        let response = app(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert!(headers.get("content-security-policy").is_some());
        assert!(headers.get(middleware::REQUEST_ID_HEADER).is_some());
    }
}
