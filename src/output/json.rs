//! JSON export
//!
//! The serialized shape of [`AnalysisResult`] is the contract consumers
//! (caches, history stores, UIs) key on, so this module deliberately adds
//! nothing on top of the struct's own serde representation.

use crate::analyzer::AnalysisResult;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serializes an analysis result to pretty-printed JSON
pub fn to_json(result: &AnalysisResult) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Writes an analysis result as JSON to the given path
///
/// # Arguments
///
/// * `result` - The analysis to export
/// * `output_path` - Path the JSON file should be written to
pub fn write_json(result: &AnalysisResult, output_path: &Path) -> OutputResult<()> {
    let json = to_json(result)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
