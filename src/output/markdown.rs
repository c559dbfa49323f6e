//! Markdown report generation
//!
//! This module renders an analysis result as a human-readable markdown
//! report: summary, per-rule breakdown, sitemap list, and recommendations
//! in checklist order.

use crate::analyzer::{AnalysisResult, Severity};
use crate::output::{content_fingerprint, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Metadata about where the analyzed robots.txt came from
#[derive(Debug, Clone)]
pub struct ReportSource {
    /// Site name or file name the snapshot is known by
    pub name: String,

    /// Origin the snapshot was captured from, when known
    pub origin: Option<String>,

    /// SHA-256 fingerprint of the snapshot content
    pub content_hash: String,

    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
}

impl ReportSource {
    /// Builds a report source for a snapshot, stamping the current time
    pub fn new(name: impl Into<String>, origin: Option<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            origin,
            content_hash: content_fingerprint(content),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Generates a markdown report and writes it to a file
///
/// # Arguments
///
/// * `result` - The analysis to render
/// * `source` - Snapshot metadata included in the report header
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_report(
    result: &AnalysisResult,
    source: &ReportSource,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(result, source);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats an analysis result as markdown
pub fn format_markdown_report(result: &AnalysisResult, source: &ReportSource) -> String {
    let mut md = String::new();

    // Title and source metadata
    md.push_str(&format!("# Robots.txt Analysis: {}\n\n", source.name));
    if let Some(origin) = &source.origin {
        md.push_str(&format!("- **Source**: {}/robots.txt\n", origin));
    }
    md.push_str(&format!("- **Content Hash**: {}\n", source.content_hash));
    md.push_str(&format!("- **Generated**: {}\n\n", source.generated_at));

    // Summary
    md.push_str("## Summary\n\n");
    md.push_str(&format!("- **Status**: {}\n", result.summary.status));
    md.push_str(&format!("- **Score**: {}/100\n", result.summary.score));
    md.push_str(&format!("- **Total Rules**: {}\n", result.summary.total_rules));
    md.push_str(&format!(
        "- **Global Rule Present**: {}\n",
        if result.summary.has_global_rule { "Yes" } else { "No" }
    ));
    md.push_str(&format!(
        "- **Sitemaps Declared**: {}\n\n",
        result.summary.total_sitemaps
    ));

    // Per-rule breakdown
    md.push_str("## Rules\n\n");
    if result.rules.is_empty() {
        md.push_str("No rules were found in this robots.txt.\n\n");
    }
    for (index, rule) in result.rules.iter().enumerate() {
        let applies_to = if rule.is_global {
            "all crawlers".to_string()
        } else {
            format!("the `{}` crawler", rule.user_agent)
        };
        md.push_str(&format!(
            "### Rule {} (`{}`)\n\nApplies to {}.\n\n",
            index + 1,
            rule.user_agent,
            applies_to
        ));

        if rule.disallowed_paths.is_empty() {
            md.push_str("- No paths are explicitly disallowed.\n");
        } else {
            md.push_str(&format!(
                "- **Disallowed** ({}): {}\n",
                rule.disallowed_paths.len(),
                code_list(&rule.disallowed_paths)
            ));
        }
        if !rule.allowed_paths.is_empty() {
            md.push_str(&format!(
                "- **Allowed** ({}): {}\n",
                rule.allowed_paths.len(),
                code_list(&rule.allowed_paths)
            ));
        }
        if let Some(delay) = rule.crawl_delay {
            md.push_str(&format!("- **Crawl delay**: {} seconds\n", delay));
        }
        md.push('\n');
    }

    // Sitemaps
    if !result.sitemaps.urls.is_empty() {
        md.push_str("## Sitemaps\n\n");
        for sitemap_url in &result.sitemaps.urls {
            md.push_str(&format!("- {}\n", sitemap_url));
        }
        md.push('\n');
    }

    // Recommendations
    md.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        md.push_str("Nothing to report; this configuration looks healthy.\n");
    }
    for recommendation in &result.recommendations {
        md.push_str(&format!(
            "- {} **{}**",
            severity_marker(recommendation.severity),
            recommendation.message
        ));
        if let Some(details) = &recommendation.details {
            md.push_str(&format!(" — {}", details));
        }
        md.push('\n');
    }
    md.push('\n');

    // Resolved URL sets
    if !result.urls.blocked.is_empty() || !result.urls.allowed.is_empty() {
        md.push_str("## Resolved URLs\n\n");
        md.push_str(&format!(
            "- **Blocked** ({}): {}\n",
            result.urls.blocked.len(),
            code_list(&result.urls.blocked)
        ));
        if !result.urls.allowed.is_empty() {
            md.push_str(&format!(
                "- **Allowed** ({}): {}\n",
                result.urls.allowed.len(),
                code_list(&result.urls.allowed)
            ));
        }
    }

    md
}

/// Formats a path list as backtick-quoted, comma-separated markdown
fn code_list(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("`{}`", path))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps a severity to its bullet marker
fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "🔴",
        Severity::Warning => "🟡",
        Severity::Info => "🔵",
        Severity::Potential => "⚪",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::parser::parse;

    fn source_for(content: &str) -> ReportSource {
        ReportSource::new("example", Some("https://example.com".to_string()), content)
    }

    #[test]
    fn test_report_contains_status_and_score() {
        let content = "User-agent: *\nDisallow: /tmp\nSitemap: https://e.com/s.xml";
        let result = analyze(&parse(content), None);
        let md = format_markdown_report(&result, &source_for(content));

        assert!(md.contains("# Robots.txt Analysis: example"));
        assert!(md.contains("✅ All Good"));
        assert!(md.contains("**Score**: 100/100"));
    }

    #[test]
    fn test_report_lists_every_recommendation() {
        let content = "User-agent: googlebot\nDisallow: /tmp";
        let result = analyze(&parse(content), None);
        let md = format_markdown_report(&result, &source_for(content));

        for recommendation in &result.recommendations {
            assert!(md.contains(&recommendation.message));
        }
    }

    #[test]
    fn test_report_mentions_source_origin() {
        let content = "User-agent: *\nDisallow: /";
        let result = analyze(&parse(content), None);
        let md = format_markdown_report(&result, &source_for(content));
        assert!(md.contains("https://example.com/robots.txt"));
        assert!(md.contains(&content_fingerprint(content)));
    }

    #[test]
    fn test_report_empty_rules_note() {
        let result = analyze(&[], None);
        let md = format_markdown_report(&result, &source_for(""));
        assert!(md.contains("No rules were found"));
    }

    #[test]
    fn test_write_markdown_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        let content = "User-agent: *\nDisallow: /admin";
        let result = analyze(&parse(content), None);

        write_markdown_report(&result, &source_for(content), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("## Summary"));
    }
}
