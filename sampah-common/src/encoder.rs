//! Kecamatan label encoder
//!
//! Mirrors the trained scikit-learn LabelEncoder artifact: an ordered,
//! deduplicated list of kecamatan names where each label's integer code is
//! its position in the list. Codes carry no semantic meaning beyond that
//! position, so the class order in the artifact must never be rearranged.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// On-disk shape of `encoder_kecamatan.json`
#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    classes: Vec<String>,
}

/// Ordered kecamatan label set with position-based integer codes
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder from an ordered label list.
    ///
    /// Duplicate labels are rejected: two labels sharing a name would make
    /// the label↔code mapping ambiguous. An empty list is accepted here —
    /// report construction rejects it instead (see `report::build_report`).
    pub fn new(classes: Vec<String>) -> Result<Self> {
        for (i, label) in classes.iter().enumerate() {
            if classes[..i].contains(label) {
                return Err(Error::Artifact(format!(
                    "Duplicate kecamatan label in encoder: {}",
                    label
                )));
            }
        }
        Ok(Self { classes })
    }

    /// Load the encoder artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: EncoderArtifact = serde_json::from_str(&raw).map_err(|e| {
            Error::Artifact(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Self::new(artifact.classes)
    }

    /// Ordered class labels (code = position)
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known kecamatan
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Integer code for a label, if known
    pub fn code_of(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// Label for an integer code, if in range
    pub fn label_of(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn encoder(labels: &[&str]) -> LabelEncoder {
        LabelEncoder::new(labels.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_codes_follow_position() {
        let enc = encoder(&["Cihideung", "Kawalu", "Tawang"]);
        assert_eq!(enc.code_of("Cihideung"), Some(0));
        assert_eq!(enc.code_of("Kawalu"), Some(1));
        assert_eq!(enc.code_of("Tawang"), Some(2));
        assert_eq!(enc.label_of(1), Some("Kawalu"));
        assert_eq!(enc.len(), 3);
    }

    #[test]
    fn test_unknown_label_and_code() {
        let enc = encoder(&["Cihideung", "Kawalu"]);
        assert_eq!(enc.code_of("Indihiang"), None);
        assert_eq!(enc.label_of(2), None);
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = LabelEncoder::new(vec![
            "Kawalu".to_string(),
            "Tawang".to_string(),
            "Kawalu".to_string(),
        ]);
        assert!(matches!(result, Err(Error::Artifact(_))));
    }

    #[test]
    fn test_empty_encoder_loads() {
        let enc = LabelEncoder::new(vec![]).unwrap();
        assert!(enc.is_empty());
    }

    #[test]
    fn test_load_from_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"classes": ["Bungursari", "Cibeureum"]}}"#).unwrap();

        let enc = LabelEncoder::load(file.path()).unwrap();
        assert_eq!(enc.classes(), &["Bungursari", "Cibeureum"]);
    }

    #[test]
    fn test_load_malformed_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = LabelEncoder::load(file.path());
        assert!(matches!(result, Err(Error::Artifact(_))));
    }
}
