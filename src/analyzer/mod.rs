//! Analysis engine for parsed robots.txt rules
//!
//! The analyzer consumes the parser's rule records plus an optional base URL
//! and produces a structured [`AnalysisResult`]: summary score and status,
//! per-rule breakdown, sitemap list, prioritized recommendations, and the
//! resolved allow/block URL sets.
//!
//! Like the parser, analysis is a pure function over its inputs. The steps
//! run in a fixed order (sitemap collection, URL resolution, platform
//! fingerprinting, sensitive-path audit, recommendation checklist) because
//! the recommendation sequence is an observable part of the output.

mod recommendations;
mod report;
pub mod sensitive;
pub mod signatures;
mod urls;

pub use report::{
    AnalysisResult, HealthStatus, Recommendation, RuleView, Severity, SitemapReport, Summary,
    UrlSets,
};
pub use urls::resolve_path;

use crate::parser::RuleRecord;
use recommendations::{run_checklist, ChecklistInput};
use sensitive::under_protected_categories;
use signatures::detect_platforms;
use url::Url;
use urls::{collect_sitemaps, resolve_url_sets};

/// Analyzes parsed robots.txt rules
///
/// # Arguments
///
/// * `rules` - The parsed rule records, as returned by [`crate::parser::parse`]
/// * `base_url` - Optional base URL; when supplied, allow/disallow paths in
///   the output URL sets are resolved to absolute form. A base URL that does
///   not parse is treated as absent rather than an error.
///
/// # Returns
///
/// A complete [`AnalysisResult`]; this function never fails.
///
/// # Example
///
/// ```
/// use robotlens::{analyze, parse};
///
/// let rules = parse("User-agent: *\nDisallow: /admin\nSitemap: https://x.com/sitemap.xml");
/// let result = analyze(&rules, Some("https://x.com"));
/// assert!(result.summary.has_global_rule);
/// assert_eq!(result.summary.total_sitemaps, 1);
/// assert_eq!(result.urls.blocked, vec!["https://x.com/admin"]);
/// ```
pub fn analyze(rules: &[RuleRecord], base_url: Option<&str>) -> AnalysisResult {
    // Step 1: collect sitemaps in first-seen order
    let sitemap_urls = collect_sitemaps(rules);

    // Step 2: resolve allow/disallow paths against the base URL
    let base = base_url.and_then(|b| Url::parse(b).ok());
    let (allowed, blocked) = resolve_url_sets(rules, base.as_ref());

    // Steps 3-4 work on the raw (lowercased) patterns, not the resolved URLs
    let all_disallow: Vec<String> = rules
        .iter()
        .flat_map(|rule| rule.disallow.iter().cloned())
        .collect();
    let mut all_paths = all_disallow.clone();
    all_paths.extend(rules.iter().flat_map(|rule| rule.allow.iter().cloned()));

    // Step 3: platform fingerprinting
    let detections = detect_platforms(&all_paths);

    // Step 4: sensitive-path audit (consumed by the checklist, gated on
    // the fingerprint results)
    let under_protected = under_protected_categories(&all_disallow);

    // Steps 5-7: recommendation checklist, score, status
    let (recommendations, score, status) = run_checklist(&ChecklistInput {
        rules,
        detections: &detections,
        under_protected: &under_protected,
        sitemap_urls: &sitemap_urls,
        all_disallow: &all_disallow,
    });

    let has_global_rule = rules.iter().any(|rule| rule.is_global());
    let rule_views = rules
        .iter()
        .map(|rule| RuleView {
            user_agent: rule.user_agent.clone(),
            is_global: rule.is_global(),
            disallowed_paths: rule.disallow.clone(),
            allowed_paths: rule.allow.clone(),
            crawl_delay: rule.crawl_delay,
        })
        .collect();

    AnalysisResult {
        summary: Summary {
            total_rules: rules.len(),
            has_global_rule,
            total_sitemaps: sitemap_urls.len(),
            score,
            status,
        },
        rules: rule_views,
        sitemaps: SitemapReport {
            urls: sitemap_urls,
            issues: Vec::new(),
        },
        recommendations,
        urls: UrlSets { allowed, blocked },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_analyze_empty_rules() {
        let result = analyze(&[], None);
        assert_eq!(result.summary.total_rules, 0);
        assert!(!result.summary.has_global_rule);
        assert_eq!(result.summary.total_sitemaps, 0);
        assert!(result.summary.score <= 100);
        assert!(result.urls.allowed.is_empty());
        assert!(result.urls.blocked.is_empty());
    }

    #[test]
    fn test_analyze_basic_global_rule() {
        let rules = parse("User-agent: *\nDisallow: /admin\nSitemap: https://x.com/sitemap.xml");
        let result = analyze(&rules, None);

        assert!(result.summary.has_global_rule);
        assert_eq!(result.summary.total_rules, 1);
        assert_eq!(result.summary.total_sitemaps, 1);
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.message.contains("No sitemap")));
    }

    #[test]
    fn test_analyze_without_base_url_keeps_raw_paths() {
        let rules = parse("User-agent: *\nDisallow: /admin\nAllow: /public");
        let result = analyze(&rules, None);
        assert_eq!(result.urls.blocked, vec!["/admin"]);
        assert_eq!(result.urls.allowed, vec!["/public"]);
    }

    #[test]
    fn test_analyze_with_base_url_resolves_paths() {
        let rules = parse("User-agent: *\nDisallow: /admin");
        let result = analyze(&rules, Some("https://example.com"));
        assert_eq!(result.urls.blocked, vec!["https://example.com/admin"]);
    }

    #[test]
    fn test_analyze_with_unparseable_base_url_degrades() {
        let rules = parse("User-agent: *\nDisallow: /admin");
        let result = analyze(&rules, Some("not a url"));
        assert_eq!(result.urls.blocked, vec!["/admin"]);
    }

    #[test]
    fn test_score_in_range_for_hostile_input() {
        let rules = parse("Disallow: ***\nUser-agent: x\nCrawl-delay: banana\nDisallow: /*/*/*");
        let result = analyze(&rules, None);
        assert!(result.summary.score <= 100);
    }

    #[test]
    fn test_missing_global_rule_reported() {
        let rules = parse("User-agent: googlebot\nDisallow: /private");
        let result = analyze(&rules, None);
        assert!(!result.summary.has_global_rule);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.severity == Severity::Error && r.message.contains("No global rule")));
    }

    #[test]
    fn test_rule_views_mirror_records() {
        let rules = parse("User-agent: *\nDisallow: /a\nAllow: /b\nCrawl-delay: 2");
        let result = analyze(&rules, None);
        assert_eq!(result.rules.len(), 1);
        let view = &result.rules[0];
        assert!(view.is_global);
        assert_eq!(view.disallowed_paths, vec!["/a"]);
        assert_eq!(view.allowed_paths, vec!["/b"]);
        assert_eq!(view.crawl_delay, Some(2.0));
    }

    #[test]
    fn test_sitemap_issues_reserved_and_empty() {
        let rules = parse("User-agent: *\nSitemap: https://x.com/s.xml");
        let result = analyze(&rules, None);
        assert!(result.sitemaps.issues.is_empty());
    }

    #[test]
    fn test_result_does_not_alias_input() {
        let rules = parse("User-agent: *\nDisallow: /admin");
        let result = analyze(&rules, None);
        drop(rules);
        assert_eq!(result.rules[0].disallowed_paths, vec!["/admin"]);
    }

    #[test]
    fn test_wordpress_detection_property() {
        // At least two of the WordPress signature paths present
        let rules = parse("User-agent: *\nDisallow: /wp-admin\nDisallow: /wp-content");
        let all: Vec<String> = rules.iter().flat_map(|r| r.disallow.clone()).collect();
        let detections = signatures::detect_platforms(&all);
        assert!(detections
            .iter()
            .any(|d| d.platform == signatures::Platform::WordPress && d.confidence >= 50));
    }
}
