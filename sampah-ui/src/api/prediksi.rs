//! Prediction API: kecamatan listing and report construction

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;
use sampah_common::{build_report, Error, FocusSummary, RankedRow};

/// Year bounds offered by the prediction form. The ranking engine itself
/// accepts any year; this is a presentation-layer guard matching the form.
pub const TAHUN_MIN: i32 = 2020;
pub const TAHUN_MAX: i32 = 2035;

/// Query parameters for GET /api/prediksi
#[derive(Debug, Deserialize)]
pub struct PrediksiQuery {
    pub tahun: i32,
    pub kecamatan: String,
}

/// Response body for GET /api/prediksi
#[derive(Debug, Serialize)]
pub struct PrediksiResponse {
    pub tahun: i32,
    pub fokus: FocusSummary,
    pub tabel: Vec<RankedRow>,
}

/// Response body for GET /api/kecamatan
#[derive(Debug, Serialize)]
pub struct KecamatanResponse {
    pub kecamatan: Vec<String>,
    pub tahun_min: i32,
    pub tahun_max: i32,
}

/// GET /api/kecamatan
///
/// Ordered kecamatan labels plus the form's year bounds; the prediction
/// page uses this to populate its inputs.
pub async fn list_kecamatan(State(state): State<AppState>) -> Json<KecamatanResponse> {
    Json(KecamatanResponse {
        kecamatan: state.encoder.classes().to_vec(),
        tahun_min: TAHUN_MIN,
        tahun_max: TAHUN_MAX,
    })
}

/// GET /api/prediksi?tahun=..&kecamatan=..
///
/// Runs the ranking engine for one year and returns the focus summary plus
/// the full ranked table. Errors never produce a partial table; the page
/// shows the error message instead of results.
pub async fn run_prediksi(
    State(state): State<AppState>,
    Query(query): Query<PrediksiQuery>,
) -> Result<Json<PrediksiResponse>, PrediksiError> {
    if query.tahun < TAHUN_MIN || query.tahun > TAHUN_MAX {
        return Err(PrediksiError::TahunOutOfRange(query.tahun));
    }

    let (table, fokus) = build_report(
        query.tahun,
        &query.kecamatan,
        &state.encoder,
        state.model.as_ref(),
    )?;

    tracing::info!(
        "Report built: tahun={} fokus={} rank={}/{}",
        query.tahun,
        fokus.kecamatan,
        fokus.rank,
        fokus.total
    );

    Ok(Json(PrediksiResponse {
        tahun: query.tahun,
        fokus,
        tabel: table.rows,
    }))
}

/// Prediction API errors
#[derive(Debug)]
pub enum PrediksiError {
    TahunOutOfRange(i32),
    Core(Error),
}

impl From<Error> for PrediksiError {
    fn from(e: Error) -> Self {
        PrediksiError::Core(e)
    }
}

impl IntoResponse for PrediksiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PrediksiError::TahunOutOfRange(tahun) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Tahun {} di luar rentang {}-{}",
                    tahun, TAHUN_MIN, TAHUN_MAX
                ),
            ),
            PrediksiError::Core(Error::InvalidFocusCategory(name)) => (
                StatusCode::BAD_REQUEST,
                format!("Kecamatan tidak dikenal: {}", name),
            ),
            PrediksiError::Core(Error::EmptyCategorySet) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Encoder artifact holds no kecamatan".to_string(),
            ),
            PrediksiError::Core(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
