//! Analysis result types
//!
//! These structures are the analyzer's output contract: they serialize to
//! the JSON shape consumed by exporters and downstream tooling, camelCase
//! field names throughout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Misconfiguration with real crawler or security impact
    Error,

    /// Should be addressed, but not breaking
    Warning,

    /// Informational note
    Info,

    /// Possible issue that needs a human look
    Potential,
}

impl Severity {
    /// Returns the lowercase string used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Potential => "potential",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall health tier derived from the recommendation severities
///
/// The serialized form is the human-facing label itself; these exact strings
/// are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "❌ Major Issues")]
    MajorIssues,

    #[serde(rename = "⚠️ Some Issues")]
    SomeIssues,

    #[serde(rename = "❓ Potential Issues")]
    PotentialIssues,

    #[serde(rename = "✅ All Good")]
    AllGood,
}

impl HealthStatus {
    /// Returns the display label for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MajorIssues => "❌ Major Issues",
            Self::SomeIssues => "⚠️ Some Issues",
            Self::PotentialIssues => "❓ Potential Issues",
            Self::AllGood => "✅ All Good",
        }
    }

    /// Derives the tier from a recommendation list: the worst severity
    /// present wins, `AllGood` when the list is empty or info-only
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let has = |severity: Severity| recommendations.iter().any(|r| r.severity == severity);

        if has(Severity::Error) {
            Self::MajorIssues
        } else if has(Severity::Warning) {
            Self::SomeIssues
        } else if has(Severity::Potential) {
            Self::PotentialIssues
        } else {
            Self::AllGood
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One actionable recommendation produced by the checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Human-readable one-line message
    pub message: String,

    /// Severity tier
    pub severity: Severity,

    /// Optional supporting detail (affected paths, counts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Top-level counters and the derived score/status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of parsed rule records
    pub total_rules: usize,

    /// Whether a `*` rule is present
    pub has_global_rule: bool,

    /// Number of distinct sitemap URLs
    pub total_sitemaps: usize,

    /// Health score, 0-100
    pub score: u32,

    /// Health tier derived from the recommendations
    pub status: HealthStatus,
}

/// Per-record view of a parsed rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleView {
    /// The crawler token the rule applies to
    pub user_agent: String,

    /// Whether this is the `*` rule
    pub is_global: bool,

    /// Disallowed path patterns in source order
    pub disallowed_paths: Vec<String>,

    /// Allowed path patterns in source order
    pub allowed_paths: Vec<String>,

    /// Crawl delay in seconds, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<f64>,
}

/// Collected sitemap URLs plus a reserved issue list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapReport {
    /// Deduplicated sitemap URLs in first-seen order
    pub urls: Vec<String>,

    /// Reserved for future sitemap validation; currently always empty
    pub issues: Vec<String>,
}

/// Resolved allow/block URL sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSets {
    /// Deduplicated allowed paths, absolute when a base URL was supplied
    pub allowed: Vec<String>,

    /// Deduplicated blocked paths, absolute when a base URL was supplied
    pub blocked: Vec<String>,
}

/// Complete analysis of one robots.txt file
///
/// A pure value: it holds no references to the rule records it was built
/// from, and the JSON serialization of this struct is the de facto wire
/// contract with every consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: Summary,
    pub rules: Vec<RuleView>,
    pub sitemaps: SitemapReport,
    pub recommendations: Vec<Recommendation>,
    pub urls: UrlSets,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(severity: Severity) -> Recommendation {
        Recommendation {
            message: "test".to_string(),
            severity,
            details: None,
        }
    }

    #[test]
    fn test_status_empty_is_all_good() {
        assert_eq!(HealthStatus::from_recommendations(&[]), HealthStatus::AllGood);
    }

    #[test]
    fn test_status_error_dominates() {
        let recs = vec![
            recommendation(Severity::Potential),
            recommendation(Severity::Error),
            recommendation(Severity::Warning),
        ];
        assert_eq!(
            HealthStatus::from_recommendations(&recs),
            HealthStatus::MajorIssues
        );
    }

    #[test]
    fn test_status_warning_over_potential() {
        let recs = vec![
            recommendation(Severity::Potential),
            recommendation(Severity::Warning),
        ];
        assert_eq!(
            HealthStatus::from_recommendations(&recs),
            HealthStatus::SomeIssues
        );
    }

    #[test]
    fn test_status_potential_only() {
        let recs = vec![recommendation(Severity::Potential)];
        assert_eq!(
            HealthStatus::from_recommendations(&recs),
            HealthStatus::PotentialIssues
        );
    }

    #[test]
    fn test_status_info_only_is_all_good() {
        let recs = vec![recommendation(Severity::Info)];
        assert_eq!(HealthStatus::from_recommendations(&recs), HealthStatus::AllGood);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Potential).unwrap(),
            "\"potential\""
        );
    }

    #[test]
    fn test_status_serializes_to_label() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::AllGood).unwrap(),
            "\"✅ All Good\""
        );
    }

    #[test]
    fn test_recommendation_omits_empty_details() {
        let value = serde_json::to_value(recommendation(Severity::Warning)).unwrap();
        assert!(value.get("details").is_none());
    }
}
