//! Pre-trained linear regression artifact
//!
//! The model was trained offline (scikit-learn LinearRegression over
//! historical per-kecamatan waste volumes) and exported as a small JSON
//! artifact. At runtime it is an opaque deterministic function of
//! `(tahun, kecamatan code)`; nothing in this workspace retrains or
//! adjusts it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prediction capability injected into the ranking engine.
///
/// The engine never touches model files directly; it sees only this trait,
/// so tests can substitute deterministic or failing doubles.
pub trait PredictionSource {
    /// Predicted waste volume (ton/year) for one kecamatan code in one year
    fn predict(&self, tahun: i32, code: usize) -> Result<f64>;
}

/// Exported coefficients of the trained regression
/// (on-disk shape of `model_lr_sampah.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coef_tahun: f64,
    pub coef_kecamatan: f64,
}

impl LinearModel {
    /// Load the model artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&raw).map_err(|e| {
            Error::Artifact(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if !model.intercept.is_finite()
            || !model.coef_tahun.is_finite()
            || !model.coef_kecamatan.is_finite()
        {
            return Err(Error::Artifact(format!(
                "Non-finite coefficient in {}",
                path.display()
            )));
        }

        Ok(model)
    }
}

impl PredictionSource for LinearModel {
    fn predict(&self, tahun: i32, code: usize) -> Result<f64> {
        Ok(self.intercept + self.coef_tahun * tahun as f64 + self.coef_kecamatan * code as f64)
    }
}
