//! Ranking engine: per-kecamatan predictions → ranked priority report
//!
//! One invocation evaluates the prediction source once per known kecamatan,
//! sorts the results descending by predicted volume, assigns 1-based ranks,
//! and buckets every row into a priority tier by quantile thresholds
//! computed over that invocation's own value column:
//!
//! - Tinggi (High):  value >= q75
//! - Sedang (Medium): value >= q50
//! - Rendah (Low):   below q50
//!
//! Thresholds are recomputed on every call from the full value column.
//! Caching them across calls would freeze tier boundaries while the
//! underlying predictions move, so the computation stays a pure function
//! of the current report.

use crate::{encoder::LabelEncoder, model::PredictionSource, Error, Result};
use serde::{Deserialize, Serialize};

/// Priority tier for one kecamatan within one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tier from a predicted value and the report's quantile thresholds.
    ///
    /// Upper bounds are inclusive: a value exactly equal to q75 is High,
    /// not Medium, so ties at a boundary land in the same tier.
    pub fn from_value(value: f64, q75: f64, q50: f64) -> Self {
        if value >= q75 {
            Priority::High
        } else if value >= q50 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Indonesian display name used by the web UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "Tinggi",
            Priority::Medium => "Sedang",
            Priority::Low => "Rendah",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the ranked report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub kecamatan: String,
    /// Predicted waste volume (ton/year)
    pub value: f64,
    /// 1-based position after the descending sort
    pub rank: usize,
    pub priority: Priority,
}

/// Full ranked table, descending by predicted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub rows: Vec<RankedRow>,
}

/// Detail card for the caller-selected kecamatan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSummary {
    pub kecamatan: String,
    pub value: f64,
    pub priority: Priority,
    pub rank: usize,
    /// Total number of kecamatan in the report
    pub total: usize,
}

/// Linear-interpolation quantile over an unordered value column.
///
/// Matches the conventional estimator (numpy/pandas default): for fraction
/// `p` over `n` ascending values, interpolate between the values at the
/// two ranks nearest `(n - 1) * p`.
///
/// # Panics
/// Panics on an empty slice; callers check for emptiness first.
pub fn quantile(values: &[f64], p: f64) -> f64 {
    assert!(!values.is_empty(), "quantile of empty value column");

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("non-comparable value"));

    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}

/// Build the ranked priority report for one year.
///
/// Evaluates `source` once per kecamatan in encoder order, sorts descending
/// by predicted value (stable: equal values keep encoder order), assigns
/// ranks 1..N, tiers every row against the report's own q75/q50, and pulls
/// out the row for `focus`.
///
/// The focus kecamatan is validated before any prediction runs; an unknown
/// focus is a caller error, never silently mapped to a default. Any
/// prediction failure abandons the whole report — a partial table would
/// violate the "every kecamatan exactly once" contract.
pub fn build_report(
    tahun: i32,
    focus: &str,
    encoder: &LabelEncoder,
    source: &dyn PredictionSource,
) -> Result<(ReportTable, FocusSummary)> {
    if encoder.is_empty() {
        return Err(Error::EmptyCategorySet);
    }
    if encoder.code_of(focus).is_none() {
        return Err(Error::InvalidFocusCategory(focus.to_string()));
    }

    let mut pairs: Vec<(String, f64)> = Vec::with_capacity(encoder.len());
    for (code, kecamatan) in encoder.classes().iter().enumerate() {
        let value = source.predict(tahun, code).map_err(|e| match e {
            Error::PredictionFailure { .. } => e,
            other => Error::PredictionFailure {
                code,
                message: other.to_string(),
            },
        })?;
        pairs.push((kecamatan.clone(), value));
    }

    // Stable sort: ties keep encoder order. That tie-break is contract,
    // not an implementation accident (sort_by in std is stable).
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("non-comparable prediction"));

    let values: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let q75 = quantile(&values, 0.75);
    let q50 = quantile(&values, 0.50);

    let rows: Vec<RankedRow> = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (kecamatan, value))| RankedRow {
            kecamatan,
            value,
            rank: i + 1,
            priority: Priority::from_value(value, q75, q50),
        })
        .collect();

    // Focus membership was checked up front, so this lookup cannot miss
    let focus_row = rows
        .iter()
        .find(|r| r.kecamatan == focus)
        .ok_or_else(|| Error::InvalidFocusCategory(focus.to_string()))?;

    let summary = FocusSummary {
        kecamatan: focus_row.kecamatan.clone(),
        value: focus_row.value,
        priority: focus_row.priority,
        rank: focus_row.rank,
        total: rows.len(),
    };

    Ok((ReportTable { rows }, summary))
}
