//! Output module for rendering and exporting analysis results
//!
//! This module handles:
//! - JSON export of [`crate::AnalysisResult`] (the wire contract consumers
//!   rely on, field for field)
//! - CSV export of rule and recommendation rows
//! - Human-readable markdown reports

mod csv;
mod json;
mod markdown;

pub use csv::to_csv;
pub use json::{to_json, write_json};
pub use markdown::{format_markdown_report, write_markdown_report, ReportSource};

use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable markdown report
    #[default]
    Markdown,

    /// Pretty-printed JSON (the AnalysisResult wire shape)
    Json,

    /// CSV rows for rules and recommendations
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for reports in this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Computes the hex-encoded SHA-256 fingerprint of a robots.txt snapshot
///
/// Reports embed this so a rendered report can be matched to the exact
/// content it was produced from.
pub fn content_fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(
            content_fingerprint("User-agent: *"),
            content_fingerprint("User-agent: *")
        );
    }

    #[test]
    fn test_fingerprint_length() {
        assert_eq!(content_fingerprint("").len(), 64);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
    }
}
