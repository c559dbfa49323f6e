//! Path-to-URL resolution for the analysis output
//!
//! Allow/disallow patterns are resolved to absolute URLs when the caller
//! supplies a base URL; anything that will not resolve falls back to the raw
//! pattern string. Resolution never fails.

use crate::parser::RuleRecord;
use url::Url;

/// Resolves a single path pattern against an optional base URL
///
/// # Arguments
///
/// * `path` - The raw (lowercased) path pattern from a rule
/// * `base` - Base URL to resolve against, if any
///
/// # Returns
///
/// The absolute URL string when resolution succeeds, the raw pattern
/// otherwise
pub fn resolve_path(path: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => base
            .join(path)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| path.to_string()),
        None => path.to_string(),
    }
}

/// Appends a value to an ordered set, keeping first-seen order
pub fn push_unique(set: &mut Vec<String>, value: String) {
    if !set.contains(&value) {
        set.push(value);
    }
}

/// Builds the deduplicated allowed/blocked URL sets across all rules
///
/// # Arguments
///
/// * `rules` - The parsed rule records
/// * `base` - Base URL to resolve patterns against, if any
///
/// # Returns
///
/// `(allowed, blocked)` in first-seen order
pub(crate) fn resolve_url_sets(rules: &[RuleRecord], base: Option<&Url>) -> (Vec<String>, Vec<String>) {
    let mut allowed = Vec::new();
    let mut blocked = Vec::new();

    for rule in rules {
        for path in &rule.allow {
            push_unique(&mut allowed, resolve_path(path, base));
        }
        for path in &rule.disallow {
            push_unique(&mut blocked, resolve_path(path, base));
        }
    }

    (allowed, blocked)
}

/// Collects all sitemap URLs across rules into a first-seen-order set
pub(crate) fn collect_sitemaps(rules: &[RuleRecord]) -> Vec<String> {
    let mut sitemaps = Vec::new();
    for rule in rules {
        for sitemap_url in &rule.sitemaps {
            push_unique(&mut sitemaps, sitemap_url.clone());
        }
    }
    sitemaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_resolve_without_base_is_identity() {
        assert_eq!(resolve_path("/admin", None), "/admin");
        assert_eq!(resolve_path("/wp-*/", None), "/wp-*/");
    }

    #[test]
    fn test_resolve_with_base() {
        let base = Url::parse("https://example.com").unwrap();
        assert_eq!(
            resolve_path("/admin", Some(&base)),
            "https://example.com/admin"
        );
    }

    #[test]
    fn test_resolve_wildcard_pattern_with_base() {
        let base = Url::parse("https://example.com").unwrap();
        // The url crate tolerates * in paths; the pattern still resolves
        assert_eq!(
            resolve_path("/search/*", Some(&base)),
            "https://example.com/search/*"
        );
    }

    #[test]
    fn test_push_unique_dedupes() {
        let mut set = vec!["/a".to_string()];
        push_unique(&mut set, "/a".to_string());
        push_unique(&mut set, "/b".to_string());
        assert_eq!(set, vec!["/a", "/b"]);
    }

    #[test]
    fn test_resolve_url_sets_dedup_across_rules() {
        let rules = parse(
            "User-agent: *\nDisallow: /admin\nAllow: /public\nUser-agent: bot\nDisallow: /admin\nDisallow: /tmp",
        );
        let (allowed, blocked) = resolve_url_sets(&rules, None);
        assert_eq!(allowed, vec!["/public"]);
        assert_eq!(blocked, vec!["/admin", "/tmp"]);
    }

    #[test]
    fn test_collect_sitemaps_first_seen_order() {
        let rules = parse(
            "User-agent: *\nSitemap: https://e.com/a.xml\nUser-agent: b\nSitemap: https://e.com/b.xml\nSitemap: https://e.com/a.xml",
        );
        let sitemaps = collect_sitemaps(&rules);
        assert_eq!(sitemaps, vec!["https://e.com/a.xml", "https://e.com/b.xml"]);
    }
}
