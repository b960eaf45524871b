//! UI serving routes
//!
//! Serves the two-page site. Pages and assets are embedded at compile time.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const PREDIKSI_HTML: &str = include_str!("../../static/prediksi.html");
const STYLE_CSS: &str = include_str!("../../static/style.css");
const PREDIKSI_JS: &str = include_str!("../../static/prediksi.js");

/// GET /
///
/// Landing page: hero, problem statement, solution cards
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /prediksi
///
/// Prediction form and report table
pub async fn serve_prediksi() -> Html<&'static str> {
    Html(PREDIKSI_HTML)
}

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}

/// GET /static/prediksi.js
pub async fn serve_prediksi_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        PREDIKSI_JS,
    )
        .into_response()
}
