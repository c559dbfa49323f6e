//! Recommendation checklist and scoring
//!
//! The checks run in a fixed order and each one appends at most one
//! recommendation while deducting from a running score that starts at 100.
//! The order of the resulting recommendation list is part of the output
//! contract, so checks must not be reordered casually.

use crate::analyzer::report::{HealthStatus, Recommendation, Severity};
use crate::analyzer::sensitive::{uncovered_paths, PathCategory, ALL_CATEGORIES};
use crate::analyzer::signatures::{Detection, Platform};
use crate::parser::RuleRecord;

const MISSING_GLOBAL_RULE_PENALTY: u32 = 20;
const FRAMEWORK_EXPOSURE_PENALTY: u32 = 15;
const FRAMEWORK_SOFT_PENALTY: u32 = 10;
const WORDPRESS_SITEMAP_PENALTY: u32 = 5;
const CATEGORY_PENALTY: u32 = 5;
const NO_SITEMAP_PENALTY: u32 = 10;
const HIGH_CRAWL_DELAY_PENALTY: u32 = 10;
const COMPLEX_WILDCARD_PENALTY: u32 = 3;

/// Crawl delays above this many seconds throttle legitimate crawlers
const MAX_REASONABLE_CRAWL_DELAY: f64 = 5.0;

/// Shopify storefront paths that should never be crawlable
const SHOPIFY_KEY_PATHS: &[&str] = &["/admin", "/cart", "/checkout", "/orders"];

/// Everything the checklist consults, gathered by the analyzer
pub(crate) struct ChecklistInput<'a> {
    pub rules: &'a [RuleRecord],
    pub detections: &'a [Detection],
    pub under_protected: &'a [PathCategory],
    pub sitemap_urls: &'a [String],
    pub all_disallow: &'a [String],
}

/// Accumulates recommendations and score deductions
struct Checklist {
    recommendations: Vec<Recommendation>,
    deductions: u32,
}

impl Checklist {
    fn new() -> Self {
        Self {
            recommendations: Vec::new(),
            deductions: 0,
        }
    }

    fn add(
        &mut self,
        severity: Severity,
        penalty: u32,
        message: impl Into<String>,
        details: Option<String>,
    ) {
        self.recommendations.push(Recommendation {
            message: message.into(),
            severity,
            details,
        });
        self.deductions += penalty;
    }

    fn finish(self) -> (Vec<Recommendation>, u32, HealthStatus) {
        let score = 100u32.saturating_sub(self.deductions);
        let status = HealthStatus::from_recommendations(&self.recommendations);
        (self.recommendations, score, status)
    }
}

/// Runs the full checklist and derives the score and status
pub(crate) fn run_checklist(input: &ChecklistInput<'_>) -> (Vec<Recommendation>, u32, HealthStatus) {
    let mut checklist = Checklist::new();

    check_global_rule(input, &mut checklist);
    for detection in input.detections {
        framework_checks(detection.platform, input, &mut checklist);
    }
    check_under_protected_categories(input, &mut checklist);
    check_missing_sitemap(input, &mut checklist);
    check_high_crawl_delay(input, &mut checklist);
    check_complex_wildcards(input, &mut checklist);
    check_shopify_exposure_note(input, &mut checklist);

    checklist.finish()
}

fn check_global_rule(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    if !input.rules.iter().any(|rule| rule.is_global()) {
        checklist.add(
            Severity::Error,
            MISSING_GLOBAL_RULE_PENALTY,
            "No global rule (User-agent: *) found",
            Some(
                "Crawlers without a dedicated rule block receive no instructions; \
                 add a User-agent: * block with default directives"
                    .to_string(),
            ),
        );
    }
}

/// Returns the subset of `paths` not covered by any disallow entry
fn unprotected<'a>(paths: &[&'a str], disallow: &[String]) -> Vec<&'a str> {
    paths
        .iter()
        .filter(|path| !disallow.iter().any(|entry| entry.contains(**path)))
        .copied()
        .collect()
}

fn framework_checks(platform: Platform, input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    let disallow = input.all_disallow;

    match platform {
        Platform::WordPress => {
            let exposed = unprotected(
                &["/wp-admin", "/wp-includes", "/wp-content/plugins", "/wp-content/themes"],
                disallow,
            );
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Error,
                    FRAMEWORK_EXPOSURE_PENALTY,
                    "WordPress core paths are not protected",
                    Some(format!("Not disallowed: {}", exposed.join(", "))),
                );
            }

            let has_xml_sitemap = input
                .sitemap_urls
                .iter()
                .any(|s| s.contains("sitemap.xml") || s.contains("sitemap_index.xml"));
            if !has_xml_sitemap {
                checklist.add(
                    Severity::Warning,
                    WORDPRESS_SITEMAP_PENALTY,
                    "WordPress site declares no XML sitemap",
                    Some(
                        "WordPress generates /sitemap.xml (or sitemap_index.xml via SEO plugins); \
                         declaring it helps search engines index content"
                            .to_string(),
                    ),
                );
            }
        }
        Platform::Drupal => {
            let exposed = unprotected(
                &["/admin", "/node/add", "/user/register", "/install.php"],
                disallow,
            );
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Error,
                    FRAMEWORK_EXPOSURE_PENALTY,
                    "Drupal administrative paths are not protected",
                    Some(format!("Not disallowed: {}", exposed.join(", "))),
                );
            }
        }
        Platform::Joomla => {
            let exposed = unprotected(&["/administrator"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Joomla administrator path is not disallowed",
                    None,
                );
            }
        }
        Platform::Magento => {
            let exposed = unprotected(&["/admin"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Error,
                    FRAMEWORK_EXPOSURE_PENALTY,
                    "Magento admin path is not disallowed",
                    Some("Add Disallow: /admin to keep the backend out of search results".to_string()),
                );
            }
        }
        Platform::Shopify => {
            let exposed = unprotected(SHOPIFY_KEY_PATHS, disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Shopify storefront paths are not fully protected",
                    Some(format!("Not disallowed: {}", exposed.join(", "))),
                );
            }
        }
        Platform::Ghost => {
            let exposed = unprotected(&["/ghost"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Ghost admin path (/ghost) is not disallowed",
                    None,
                );
            }
        }
        Platform::Laravel => {
            let exposed = unprotected(&["/storage", "/vendor"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Laravel internal directories are not protected",
                    Some(format!("Not disallowed: {}", exposed.join(", "))),
                );
            }
        }
        Platform::Django => {
            let exposed = unprotected(&["/admin"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Django admin path is not disallowed",
                    None,
                );
            }
        }
        Platform::Rails => {
            let exposed = unprotected(&["/rails"], disallow);
            if !exposed.is_empty() {
                checklist.add(
                    Severity::Warning,
                    FRAMEWORK_SOFT_PENALTY,
                    "Rails internal routes (/rails) are not disallowed",
                    None,
                );
            }
        }
    }
}

fn check_under_protected_categories(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    // Fingerprint gate: without a detected platform these findings are
    // noise for generic or custom sites
    if input.detections.is_empty() {
        return;
    }

    for category in ALL_CATEGORIES {
        if !input.under_protected.contains(category) {
            continue;
        }
        let relevant = input
            .detections
            .iter()
            .any(|d| d.platform.relevant_categories().contains(category));
        if !relevant {
            continue;
        }

        let gaps = uncovered_paths(*category, input.all_disallow);
        checklist.add(
            Severity::Warning,
            CATEGORY_PENALTY,
            format!("Most {} paths are crawlable", category.label()),
            Some(format!("Consider disallowing: {}", gaps.join(", "))),
        );
    }
}

fn check_missing_sitemap(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    if input.detections.is_empty() && input.sitemap_urls.is_empty() {
        checklist.add(
            Severity::Warning,
            NO_SITEMAP_PENALTY,
            "No sitemap declared",
            Some(
                "A Sitemap: directive helps search engines discover content efficiently"
                    .to_string(),
            ),
        );
    }
}

fn check_high_crawl_delay(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    if !input.detections.is_empty() {
        return;
    }

    // NaN from an unparseable crawl-delay compares false here, so a broken
    // value never triggers the warning
    let excessive = input.rules.iter().find(|rule| {
        rule.crawl_delay
            .map_or(false, |delay| delay > MAX_REASONABLE_CRAWL_DELAY)
    });

    if let Some(rule) = excessive {
        checklist.add(
            Severity::Warning,
            HIGH_CRAWL_DELAY_PENALTY,
            "Crawl delay is very high",
            Some(format!(
                "User-agent '{}' is delayed {} seconds between requests; large delays \
                 slow indexing of the whole site",
                rule.user_agent,
                rule.crawl_delay.unwrap_or(f64::NAN)
            )),
        );
    }
}

fn check_complex_wildcards(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    let complex = input.all_disallow.iter().find(|pattern| {
        let stars = pattern.matches('*').count();
        (stars >= 1 && pattern.contains('/')) || stars > 1
    });

    if let Some(pattern) = complex {
        checklist.add(
            Severity::Potential,
            COMPLEX_WILDCARD_PENALTY,
            "Complex wildcard patterns in Disallow rules",
            Some(format!(
                "Pattern '{}' may match more than intended; not all crawlers \
                 interpret wildcards the same way",
                pattern
            )),
        );
    }
}

/// Trailing Shopify note, intentionally duplicating the earlier framework
/// warning for the same paths (kept for output compatibility)
fn check_shopify_exposure_note(input: &ChecklistInput<'_>, checklist: &mut Checklist) {
    let shopify_detected = input
        .detections
        .iter()
        .any(|d| d.platform == Platform::Shopify);
    if !shopify_detected {
        return;
    }

    let exposed = unprotected(SHOPIFY_KEY_PATHS, input.all_disallow);
    if !exposed.is_empty() {
        checklist.add(
            Severity::Potential,
            COMPLEX_WILDCARD_PENALTY,
            "Shopify checkout and account pages may be crawlable",
            Some(format!("Review: {}", exposed.join(", "))),
        );
    }
}
