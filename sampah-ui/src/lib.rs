//! sampah-ui library - web front end for the waste-priority predictor
//!
//! Serves the two-page site (landing + prediction form) and the JSON
//! endpoints the prediction page calls.

use axum::Router;
use sampah_common::{LabelEncoder, LinearModel};
use std::sync::Arc;

pub mod api;

/// Application state shared across HTTP handlers.
///
/// Both artifacts are loaded once at startup and never mutated, so handlers
/// share them through cheap Arc clones.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<LinearModel>,
    pub encoder: Arc<LabelEncoder>,
}

impl AppState {
    pub fn new(model: LinearModel, encoder: LabelEncoder) -> Self {
        Self {
            model: Arc::new(model),
            encoder: Arc::new(encoder),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/prediksi", get(api::serve_prediksi))
        .route("/static/style.css", get(api::serve_style_css))
        .route("/static/prediksi.js", get(api::serve_prediksi_js))
        .route("/api/kecamatan", get(api::list_kecamatan))
        .route("/api/prediksi", get(api::run_prediksi))
        .merge(api::health_routes())
        .with_state(state)
}
