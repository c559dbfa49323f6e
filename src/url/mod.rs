//! URL handling module for RobotLens
//!
//! This module normalizes the base URLs supplied by callers before they are
//! handed to the analyzer. The analyzer itself tolerates any base string;
//! normalization here exists so the CLI and config layer accept the forms
//! people actually type (bare domains, http:// addresses).

mod normalize;

// Re-export main functions
pub use normalize::{normalize_base_url, origin};
