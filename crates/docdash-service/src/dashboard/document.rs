//! Input records for dashboard assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a document is in the classification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    /// Classified successfully.
    #[default]
    Completed,
    /// Classification failed.
    Failed,
    /// Still in the pipeline.
    Processing,
}

impl ProcessingStatus {
    /// Whether the pipeline has finished with this document.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Processing)
    }
}

/// A document as seen by the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Original file name, including extension.
    pub file_name: String,
    /// Assigned classification, if any.
    #[serde(default)]
    pub classification: Option<String>,
    /// When processing finished or was last updated.
    pub processed_at: DateTime<Utc>,
    /// Pipeline outcome.
    #[serde(default)]
    pub status: ProcessingStatus,
}

impl ProcessedDocument {
    /// Lowercase extension without the dot, or an empty string.
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// Classification label, falling back to `unclassified` when missing or blank.
    pub fn classification_or<'a>(&'a self, unclassified: &'a str) -> &'a str {
        match self.classification.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => unclassified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, class: Option<&str>) -> ProcessedDocument {
        ProcessedDocument {
            file_name: name.to_string(),
            classification: class.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(doc("Contrato.PDF", None).extension(), "pdf");
        assert_eq!(doc("archive.tar.gz", None).extension(), "gz");
        assert_eq!(doc("README", None).extension(), "");
        assert_eq!(doc(".env", None).extension(), "");
    }

    #[test]
    fn test_classification_fallback() {
        assert_eq!(doc("a.pdf", Some("Nota Fiscal")).classification_or("-"), "Nota Fiscal");
        assert_eq!(doc("a.pdf", Some("  ")).classification_or("-"), "-");
        assert_eq!(doc("a.pdf", None).classification_or("-"), "-");
    }

    #[test]
    fn test_is_finished() {
        assert!(ProcessingStatus::Completed.is_finished());
        assert!(ProcessingStatus::Failed.is_finished());
        assert!(!ProcessingStatus::Processing.is_finished());
    }

    #[test]
    fn test_status_deserialize() {
        let json = r#"{"file_name":"x.pdf","processed_at":"2024-05-01T10:00:00Z","status":"failed"}"#;
        let d: ProcessedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(d.status, ProcessingStatus::Failed);
        assert!(d.classification.is_none());
    }
}
