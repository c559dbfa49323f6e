use crate::UrlError;
use url::Url;

/// Normalizes a user-supplied base URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `https://` when no scheme is present (bare domains)
/// 3. Upgrade `http://` to `https://`
/// 4. Parse; reject non-HTTP schemes and URLs without a host
///
/// # Arguments
///
/// * `input` - The base URL string as typed (e.g. `"example.com"`)
///
/// # Returns
///
/// * `Ok(Url)` - Normalized HTTPS base URL
/// * `Err(UrlError)` - The input cannot be used as a base URL
///
/// # Examples
///
/// ```
/// use robotlens::url::normalize_base_url;
///
/// let url = normalize_base_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// let url = normalize_base_url("http://example.com/shop").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/shop");
/// ```
pub fn normalize_base_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();

    // Step 2 & 3: force an https:// prefix
    let with_scheme = if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("https://{}", rest)
    } else if trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS base URLs are supported, got: {}",
            trimmed
        )));
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Returns the origin (`scheme://host[:port]`) of a normalized base URL
///
/// This is the location the robots.txt a caller analyzed would have been
/// fetched from (`{origin}/robots.txt`).
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        let url = normalize_base_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_http_upgraded_to_https() {
        let url = normalize_base_url("http://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_https_unchanged() {
        let url = normalize_base_url("https://example.com/path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let url = normalize_base_url("  example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = normalize_base_url("ftp://example.com");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(normalize_base_url("https://").is_err());
    }

    #[test]
    fn test_origin() {
        let url = normalize_base_url("example.com/deep/path").unwrap();
        assert_eq!(origin(&url), "https://example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let url = normalize_base_url("https://example.com:8443/x").unwrap();
        assert_eq!(origin(&url), "https://example.com:8443");
    }
}
