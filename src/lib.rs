//! RobotLens: a robots.txt analysis toolkit
//!
//! This crate parses robots.txt content into structured per-user-agent rules,
//! then scores the configuration and produces recommendations about crawler
//! accessibility, SEO risk, and security exposure.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod parser;
pub mod url;

use thiserror::Error;

/// Main error type for RobotLens operations
#[derive(Debug, Error)]
pub enum RobotLensError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for RobotLens operations
pub type Result<T> = std::result::Result<T, RobotLensError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analyzer::{analyze, AnalysisResult, HealthStatus, Recommendation, Severity};
pub use config::Config;
pub use parser::{parse, RuleRecord};
pub use url::{normalize_base_url, origin};
