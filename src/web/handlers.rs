//! Gateway handler: the two-way branch between the upstream forwarder and the
//! static file tree.

use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::routes::{classify, RouteKind};
use crate::state::AppState;

/// Single entry point for every request.
pub async fn gateway(State(state): State<Arc<AppState>>, req: Request) -> Response {
    match classify(req.uri().path()) {
        RouteKind::Api => handle_api(state, req).await,
        RouteKind::Static => handle_static(state, req).await,
    }
}

/// Forward an API request and relay the backend body.
///
/// Whatever status the backend answered with, the caller gets a 200; only a
/// transport failure produces a 500 carrying the failure text.
async fn handle_api(state: Arc<AppState>, req: Request) -> Response {
    // Path and query travel verbatim to the backend.
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());

    match *req.method() {
        Method::GET => relay(state.upstream.forward_get(&target).await),
        Method::POST => {
            let body = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        format!("failed to read request body: {}", e),
                    )
                        .into_response();
                }
            };
            relay(state.upstream.forward_post(&target, body).await)
        }
        Method::OPTIONS => StatusCode::NO_CONTENT.into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

fn relay(result: Result<bytes::Bytes, crate::proxy::UpstreamError>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("upstream failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Serve a file from the static root.
///
/// Only GET/HEAD reach the file system. POST to a static path is a 404 by
/// policy (only `/api/` paths accept POST), and OPTIONS is answered directly
/// so browser preflights succeed.
async fn handle_static(state: Arc<AppState>, req: Request) -> Response {
    match *req.method() {
        Method::GET | Method::HEAD => {
            match ServeDir::new(&state.static_dir).oneshot(req).await {
                Ok(response) => response.into_response(),
                Err(infallible) => match infallible {},
            }
        }
        Method::OPTIONS => StatusCode::NO_CONTENT.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
