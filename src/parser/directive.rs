/// A single recognized robots.txt directive with its processed value
///
/// Case policy follows what downstream matching needs: user-agent tokens and
/// path patterns are lowercased, sitemap URLs keep their original case
/// (sitemap URLs are case-sensitive), and crawl delays are parsed to `f64`
/// with `NaN` standing in for non-numeric values.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `User-agent:` line, lowercased crawler token
    UserAgent(String),

    /// `Disallow:` line, lowercased path pattern
    Disallow(String),

    /// `Allow:` line, lowercased path pattern
    Allow(String),

    /// `Crawl-delay:` line in seconds; `NaN` when the value does not parse
    CrawlDelay(f64),

    /// `Sitemap:` line, URL in original case
    Sitemap(String),
}

/// Parses a single robots.txt line into a directive
///
/// Blank lines, full-line `#` comments, lines without a colon, and
/// unrecognized directive names all yield `None`. Inline comments after a
/// directive value are NOT stripped; that matches how the matching layer
/// treats values and is deliberate.
///
/// # Arguments
///
/// * `line` - One raw line of robots.txt text
///
/// # Returns
///
/// * `Some(Directive)` - The line held a recognized directive
/// * `None` - The line was blank, a comment, or malformed
pub fn parse_line(line: &str) -> Option<Directive> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Split on the first colon only; sitemap values contain colons themselves
    let (name, value) = line.split_once(':')?;
    let name = name.trim().to_lowercase();
    let value = value.trim();

    match name.as_str() {
        "user-agent" => Some(Directive::UserAgent(value.to_lowercase())),
        "disallow" => Some(Directive::Disallow(value.to_lowercase())),
        "allow" => Some(Directive::Allow(value.to_lowercase())),
        "crawl-delay" => Some(Directive::CrawlDelay(
            value.parse::<f64>().unwrap_or(f64::NAN),
        )),
        "sitemap" => Some(Directive::Sitemap(value.to_string())),
        _ => None,
    }
}
