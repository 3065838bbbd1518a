//! Error types for ashvanta-core
//!
//! Only file and configuration edges can fail. Bad menu entries are never
//! errors: they are dropped at ingestion and recorded in an [`IngestReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ashvanta operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse menu payload: {message}")]
    MenuParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse JSON config in {path}: {message}")]
    ConfigJsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML config in {path}: {message}")]
    ConfigTomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Why a menu entry was left out of the rendered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Entry was not an object, or a field had the wrong type
    Malformed,
    /// Title missing or blank
    MissingTitle,
    /// None of url / resource.url / resource.handle present
    MissingUrl,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Malformed => "malformed entry",
            DropReason::MissingTitle => "missing title",
            DropReason::MissingUrl => "missing url",
        }
    }
}

/// A single entry dropped during menu ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedItem {
    /// Slash-separated position in the source tree, e.g. `2/0`
    pub position: String,
    /// Source id when one was present
    pub id: Option<String>,
    pub reason: DropReason,
}

/// Report of entries dropped while ingesting a menu payload
///
/// Ingestion degrades silently; this report exists for tooling and tests,
/// never for the shopper.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub dropped: Vec<DroppedItem>,
    pub accepted: usize,
}

impl IngestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_item(&mut self, position: String, id: Option<String>, reason: DropReason) {
        tracing::debug!(%position, ?id, reason = reason.as_str(), "Dropping menu entry");
        self.dropped.push(DroppedItem {
            position,
            id,
            reason,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Count of dropped entries with the given reason
    pub fn count(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason == reason).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_report_counts_by_reason() {
        let mut report = IngestReport::new();
        assert!(report.is_clean());

        report.drop_item("0".into(), Some("a".into()), DropReason::MissingTitle);
        report.drop_item("1".into(), None, DropReason::MissingUrl);
        report.drop_item("2/0".into(), None, DropReason::MissingUrl);

        assert!(!report.is_clean());
        assert_eq!(report.count(DropReason::MissingTitle), 1);
        assert_eq!(report.count(DropReason::MissingUrl), 2);
        assert_eq!(report.count(DropReason::Malformed), 0);
    }

    #[test]
    fn test_config_error_display() {
        let err = CoreError::InvalidConfig {
            message: "hide_threshold below top_threshold".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: hide_threshold below top_threshold"
        );
    }
}
