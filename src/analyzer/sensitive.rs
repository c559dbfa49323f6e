//! Sensitive-path protection audit
//!
//! A fixed catalog of path categories (admin surfaces, auth endpoints,
//! uploads, ...) is checked against the file's disallow entries. Findings
//! are fingerprint-gated: they only reach the recommendation list for
//! categories relevant to a detected platform, so generic sites are not
//! flooded with noise.

use crate::analyzer::signatures::Platform;

/// Fraction of a category's paths that may go uncovered before the
/// category counts as under-protected
pub const UNPROTECTED_RATIO: f64 = 0.30;

/// Categories of canonically sensitive paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCategory {
    Admin,
    Auth,
    User,
    Ecommerce,
    Api,
    Sensitive,
    Media,
}

/// All categories in fixed catalog order
pub const ALL_CATEGORIES: &[PathCategory] = &[
    PathCategory::Admin,
    PathCategory::Auth,
    PathCategory::User,
    PathCategory::Ecommerce,
    PathCategory::Api,
    PathCategory::Sensitive,
    PathCategory::Media,
];

impl PathCategory {
    /// Returns the human-readable category name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Auth => "authentication",
            Self::User => "user profile",
            Self::Ecommerce => "e-commerce",
            Self::Api => "API",
            Self::Sensitive => "sensitive file",
            Self::Media => "media upload",
        }
    }

    /// Returns the canonical sensitive path prefixes for this category
    pub fn canonical_paths(&self) -> &'static [&'static str] {
        match self {
            Self::Admin => &["/admin", "/administrator", "/wp-admin", "/backend"],
            Self::Auth => &["/login", "/signin", "/auth", "/password"],
            Self::User => &["/user", "/profile", "/account"],
            Self::Ecommerce => &["/cart", "/checkout", "/orders", "/payment"],
            Self::Api => &["/api", "/graphql", "/rest"],
            Self::Sensitive => &["/.env", "/.git", "/config", "/backup"],
            Self::Media => &["/uploads", "/media", "/files"],
        }
    }
}

impl Platform {
    /// Returns the sensitive-path categories relevant to this platform
    ///
    /// Under-protection findings for other categories are suppressed for
    /// the platform, keeping recommendations specific to how each system
    /// is actually deployed.
    pub fn relevant_categories(&self) -> &'static [PathCategory] {
        match self {
            Self::WordPress => &[PathCategory::Admin, PathCategory::Media],
            Self::Drupal => &[PathCategory::Admin, PathCategory::User],
            Self::Joomla => &[PathCategory::Admin, PathCategory::Media],
            Self::Magento => &[PathCategory::Ecommerce, PathCategory::Admin],
            Self::Shopify => &[PathCategory::Ecommerce, PathCategory::Admin],
            Self::Ghost => &[PathCategory::Admin],
            Self::Laravel => &[PathCategory::Admin, PathCategory::Api, PathCategory::Sensitive],
            Self::Django => &[PathCategory::Admin, PathCategory::Auth, PathCategory::Media],
            Self::Rails => &[PathCategory::Admin, PathCategory::Api],
        }
    }
}

/// Checks whether a canonical path is covered by any disallow entry
///
/// Coverage is a case-insensitive substring containment test: the path is
/// covered when some disallow pattern contains it. Disallow patterns are
/// already lowercased by the parser, as are the catalog paths.
pub fn is_path_covered(path: &str, disallow: &[String]) -> bool {
    disallow.iter().any(|pattern| pattern.contains(path))
}

/// Returns the canonical paths of a category that no disallow entry covers
pub fn uncovered_paths(category: PathCategory, disallow: &[String]) -> Vec<&'static str> {
    category
        .canonical_paths()
        .iter()
        .filter(|path| !is_path_covered(path, disallow))
        .copied()
        .collect()
}

/// Audits disallow coverage and returns the under-protected categories
///
/// A category is under-protected when more than `UNPROTECTED_RATIO` of its
/// canonical paths are not covered by any disallow entry. Results keep the
/// fixed catalog order.
///
/// # Arguments
///
/// * `disallow` - Union of all disallow patterns across rules
pub fn under_protected_categories(disallow: &[String]) -> Vec<PathCategory> {
    ALL_CATEGORIES
        .iter()
        .copied()
        .filter(|category| {
            let total = category.canonical_paths().len();
            let uncovered = uncovered_paths(*category, disallow).len();
            uncovered as f64 / total as f64 > UNPROTECTED_RATIO
        })
        .collect()
}
