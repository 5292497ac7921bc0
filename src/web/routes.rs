//! Request classification and router assembly.

use axum::Router;
use std::sync::Arc;

use super::{handlers, middleware};
use crate::state::AppState;

/// Reserved prefix for requests that go to the backend instead of disk.
pub const API_PREFIX: &str = "/api/";

/// The two terminal routes a request can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Api,
    Static,
}

/// Classify a request path. Pure and O(1); the whole dispatch decision.
pub fn classify(path: &str) -> RouteKind {
    if path.starts_with(API_PREFIX) {
        RouteKind::Api
    } else {
        RouteKind::Static
    }
}

/// Build the complete application router.
///
/// A single fallback handler sees every request and branches on
/// [`classify`]; the CORS layer stamps every response on the way out, and the
/// request logger wraps both.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::gateway)
        .layer(axum::middleware::from_fn(middleware::apply_cors))
        .layer(axum::middleware::from_fn(middleware::request_logger))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_api_paths() {
        assert_eq!(classify("/api/pins"), RouteKind::Api);
        assert_eq!(classify("/api/curated-boards?limit=5"), RouteKind::Api);
        assert_eq!(classify("/api/"), RouteKind::Api);
    }

    #[test]
    fn test_classify_static_paths() {
        assert_eq!(classify("/"), RouteKind::Static);
        assert_eq!(classify("/color-curator.html"), RouteKind::Static);
        assert_eq!(classify("/assets/logo.png"), RouteKind::Static);
    }

    #[test]
    fn test_prefix_must_match_whole_segment() {
        // "/apiary" shares letters with the prefix but has no trailing slash
        assert_eq!(classify("/apiary"), RouteKind::Static);
        assert_eq!(classify("/api"), RouteKind::Static);
    }
}
