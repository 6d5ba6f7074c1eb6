use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::config::TocOptions;
use crate::formats::{AnnotatedDocument, HeadingRecord};

#[derive(Clone)]
struct AppState {
    options: Arc<TocOptions>,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub html: String,
}

/// HTTP surface for page renderers. Every request runs the pipeline on its own
/// copy of the content; the options are the only shared state and are never mutated.
pub fn router(options: TocOptions) -> Router {
    let state = AppState {
        options: Arc::new(options),
    };

    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/v1/annotate", post(annotate_handler))
        .route("/v1/headings", post(headings_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn annotate_handler(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> Json<AnnotatedDocument> {
    Json(crate::annotate::annotate(&req.html, &state.options))
}

async fn headings_handler(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> Json<Vec<HeadingRecord>> {
    Json(crate::annotate::headings(&req.html, &state.options))
}
