//! Common error types for the sampah workspace

use thiserror::Error;

/// Common result type for sampah operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by artifact loading and report construction
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model or encoder artifact is missing, unreadable, or malformed
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Requested focus kecamatan is not in the encoder's class set
    #[error("Unknown kecamatan: {0}")]
    InvalidFocusCategory(String),

    /// Encoder holds no classes; a report cannot be built over nothing
    #[error("Encoder has no kecamatan classes")]
    EmptyCategorySet,

    /// The prediction source failed for one kecamatan code.
    /// The whole report is abandoned; a partial table would silently
    /// drop districts from the ranking.
    #[error("Prediction failed for kecamatan code {code}: {message}")]
    PredictionFailure { code: usize, message: String },
}
