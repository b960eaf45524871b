//! HTTP API handlers for sampah-ui

pub mod health;
pub mod prediksi;
pub mod ui;

pub use health::health_routes;
pub use prediksi::{list_kecamatan, run_prediksi};
pub use ui::{serve_index, serve_prediksi, serve_prediksi_js, serve_style_css};
