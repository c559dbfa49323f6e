//! Web-application fingerprinting from robots.txt path patterns
//!
//! Each platform signature is a fixed list of characteristic path substrings.
//! A pattern found anywhere in the union of a file's allow/disallow paths
//! contributes a fixed confidence increment; a platform counts as detected
//! once its cumulative confidence reaches the threshold (at least two
//! distinct patterns present).

/// Confidence points contributed by each matching signature pattern
pub const CONFIDENCE_PER_PATTERN: u32 = 25;

/// Minimum cumulative confidence for a platform to count as detected
pub const DETECTION_THRESHOLD: u32 = 50;

/// Known web platforms with robots.txt fingerprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    WordPress,
    Drupal,
    Joomla,
    Magento,
    Shopify,
    Ghost,
    Laravel,
    Django,
    Rails,
}

/// All platforms in fixed catalog order
///
/// Detection results and framework-specific recommendations follow this
/// order, which makes the recommendation sequence deterministic.
pub const ALL_PLATFORMS: &[Platform] = &[
    Platform::WordPress,
    Platform::Drupal,
    Platform::Joomla,
    Platform::Magento,
    Platform::Shopify,
    Platform::Ghost,
    Platform::Laravel,
    Platform::Django,
    Platform::Rails,
];

impl Platform {
    /// Returns the human-readable platform name
    pub fn label(&self) -> &'static str {
        match self {
            Self::WordPress => "WordPress",
            Self::Drupal => "Drupal",
            Self::Joomla => "Joomla",
            Self::Magento => "Magento",
            Self::Shopify => "Shopify",
            Self::Ghost => "Ghost",
            Self::Laravel => "Laravel",
            Self::Django => "Django",
            Self::Rails => "Rails",
        }
    }

    /// Returns the characteristic path substrings for this platform
    ///
    /// Each list holds the paths the platform's stock robots.txt mentions,
    /// at most four per platform.
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Self::WordPress => &["/wp-admin", "/wp-content", "/wp-includes", "/wp-json"],
            Self::Drupal => &["/core/", "/profiles/", "/node/add", "/user/register"],
            Self::Joomla => &["/administrator", "/components", "/templates", "/plugins"],
            Self::Magento => &["/checkout", "/customer", "/catalogsearch", "/downloader"],
            Self::Shopify => &["/cart", "/orders", "/checkout", "/carts"],
            Self::Ghost => &["/ghost/", "/p/", "/email/"],
            Self::Laravel => &["/vendor", "/storage", "/artisan", "/.env"],
            Self::Django => &["/admin/", "/static/", "/media/", "/accounts/"],
            Self::Rails => &["/rails/", "/assets/", "/cable", "/active_storage"],
        }
    }
}

/// A detected platform with its cumulative confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub platform: Platform,
    pub confidence: u32,
}

/// Scans path patterns for platform signatures
///
/// A signature pattern matches when any path in `paths` contains it as a
/// substring; each matching pattern counts once regardless of how many
/// paths contain it. Paths are expected to be lowercased already (the
/// parser guarantees this for rule paths).
///
/// # Arguments
///
/// * `paths` - Union of all allow and disallow paths across rules
///
/// # Returns
///
/// Detected platforms in catalog order with their confidence scores
pub fn detect_platforms(paths: &[String]) -> Vec<Detection> {
    ALL_PLATFORMS
        .iter()
        .filter_map(|platform| {
            let matched = platform
                .patterns()
                .iter()
                .filter(|pattern| paths.iter().any(|path| path.contains(*pattern)))
                .count() as u32;
            let confidence = matched * CONFIDENCE_PER_PATTERN;

            (confidence >= DETECTION_THRESHOLD).then_some(Detection {
                platform: *platform,
                confidence,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_paths_no_detection() {
        assert!(detect_platforms(&[]).is_empty());
    }

    #[test]
    fn test_single_pattern_is_below_threshold() {
        let detections = detect_platforms(&paths(&["/wp-admin/"]));
        assert!(detections.is_empty());
    }

    #[test]
    fn test_two_patterns_detect_wordpress() {
        let detections = detect_platforms(&paths(&["/wp-admin/", "/wp-includes/"]));
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].platform, Platform::WordPress);
        assert_eq!(detections[0].confidence, 50);
    }

    #[test]
    fn test_full_confidence_caps_at_pattern_count() {
        let detections = detect_platforms(&paths(&[
            "/wp-admin/",
            "/wp-content/plugins",
            "/wp-includes/",
            "/wp-json/",
        ]));
        assert_eq!(detections[0].confidence, 100);
    }

    #[test]
    fn test_pattern_counted_once_across_paths() {
        // Two paths containing the same pattern still contribute 25 points
        let detections = detect_platforms(&paths(&["/wp-admin/", "/wp-admin/users", "/wp-json"]));
        assert_eq!(detections[0].confidence, 50);
    }

    #[test]
    fn test_substring_match_inside_longer_path() {
        let detections = detect_platforms(&paths(&[
            "/shop/checkout/step-one",
            "/shop/cart/items",
        ]));
        assert!(detections
            .iter()
            .any(|d| d.platform == Platform::Shopify));
    }

    #[test]
    fn test_multiple_platforms_in_catalog_order() {
        let detections = detect_platforms(&paths(&[
            "/wp-admin/",
            "/wp-json/",
            "/cart",
            "/checkout",
        ]));
        let platforms: Vec<Platform> = detections.iter().map(|d| d.platform).collect();
        // Magento sees only /checkout (25 points) and stays undetected
        assert_eq!(platforms, vec![Platform::WordPress, Platform::Shopify]);
    }

    #[test]
    fn test_generic_site_not_detected() {
        let detections = detect_platforms(&paths(&["/private", "/tmp", "/search"]));
        assert!(detections.is_empty());
    }
}
