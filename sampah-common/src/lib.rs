//! # Sampah Common Library
//!
//! Shared core for the waste-priority prediction system:
//! - Label encoder artifact (kecamatan ↔ integer code)
//! - Pre-trained linear regression artifact
//! - Ranking engine (predictions → ranked priority report)
//! - Models-directory resolution
//! - Common error types

use std::path::Path;

pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod report;

pub use encoder::LabelEncoder;
pub use error::{Error, Result};
pub use model::{LinearModel, PredictionSource};
pub use report::{build_report, FocusSummary, Priority, RankedRow, ReportTable};

/// Load both trained artifacts from the models directory
pub fn load_artifacts(models_dir: &Path) -> Result<(LinearModel, LabelEncoder)> {
    let model = LinearModel::load(&models_dir.join(config::MODEL_FILE))?;
    let encoder = LabelEncoder::load(&models_dir.join(config::ENCODER_FILE))?;
    tracing::info!(
        "Loaded artifacts from {} ({} kecamatan)",
        models_dir.display(),
        encoder.len()
    );
    Ok((model, encoder))
}
