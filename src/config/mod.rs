//! Configuration module for RobotLens
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files for batch analysis runs: each configured site names a robots.txt
//! snapshot on disk plus the base URL it was captured from.
//!
//! # Example
//!
//! ```no_run
//! use robotlens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robotlens.toml")).unwrap();
//! println!("Analyzing {} sites", config.sites.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SiteEntry};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
