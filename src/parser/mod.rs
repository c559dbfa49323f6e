//! Robots.txt parser module
//!
//! This module converts raw robots.txt text into an ordered list of
//! per-user-agent rule records. Parsing never fails: malformed lines are
//! dropped and orphaned values are ignored, so arbitrary input always
//! produces a (possibly empty) rule list.

mod directive;
mod rules;

// Re-export main types and functions
pub use directive::{parse_line, Directive};
pub use rules::{parse, RuleRecord};
