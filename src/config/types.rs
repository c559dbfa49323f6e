use crate::output::ReportFormat;
use serde::Deserialize;

/// Main configuration structure for batch analysis runs
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    #[serde(default, rename = "site")]
    pub sites: Vec<SiteEntry>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory reports are written into, one file per site
    #[serde(rename = "report-dir")]
    pub report_dir: String,

    /// Report format (markdown, json, or csv)
    #[serde(default)]
    pub format: ReportFormat,
}

/// One site to analyze: a robots.txt snapshot plus its source base URL
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    /// Short name used for log lines and report file names
    pub name: String,

    /// Path to the robots.txt snapshot file
    #[serde(rename = "robots-path")]
    pub robots_path: String,

    /// Base URL the snapshot was captured from; enables absolute URL
    /// resolution in the analysis output
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,
}
