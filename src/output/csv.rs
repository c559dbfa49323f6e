//! CSV export
//!
//! Three sections in one file (rules, sitemaps, recommendations) separated
//! by blank lines. Path lists are joined with `"; "` inside a single cell.
//! Quoting follows RFC 4180: fields containing commas, quotes, or line
//! breaks are wrapped in double quotes with inner quotes doubled.

use crate::analyzer::AnalysisResult;

/// Serializes an analysis result to CSV text
pub fn to_csv(result: &AnalysisResult) -> String {
    let mut csv = String::new();

    csv.push_str("User-Agent,Is Global,Disallowed Paths,Allowed Paths,Crawl Delay\n");
    for rule in &result.rules {
        let crawl_delay = rule
            .crawl_delay
            .map(|delay| delay.to_string())
            .unwrap_or_default();
        let row = [
            escape(&rule.user_agent),
            rule.is_global.to_string(),
            escape(&rule.disallowed_paths.join("; ")),
            escape(&rule.allowed_paths.join("; ")),
            crawl_delay,
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv.push('\n');
    csv.push_str("Sitemap URL\n");
    for sitemap_url in &result.sitemaps.urls {
        csv.push_str(&escape(sitemap_url));
        csv.push('\n');
    }

    csv.push('\n');
    csv.push_str("Severity,Message,Details\n");
    for recommendation in &result.recommendations {
        let row = [
            recommendation.severity.as_str().to_string(),
            escape(&recommendation.message),
            escape(recommendation.details.as_deref().unwrap_or("")),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// Quotes a CSV field when it needs quoting
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::parser::parse;

    #[test]
    fn test_escape_plain_field() {
        assert_eq!(escape("/admin"), "/admin");
    }

    #[test]
    fn test_escape_comma() {
        assert_eq!(escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_escape_quotes_doubled() {
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_has_all_sections() {
        let rules = parse(
            "User-agent: googlebot\nDisallow: /private\nSitemap: https://e.com/s.xml",
        );
        let result = analyze(&rules, None);
        let csv = to_csv(&result);

        assert!(csv.starts_with("User-Agent,Is Global,"));
        assert!(csv.contains("googlebot,false,/private"));
        assert!(csv.contains("Sitemap URL\nhttps://e.com/s.xml\n"));
        assert!(csv.contains("Severity,Message,Details"));
        // Missing global rule shows up as an error row
        assert!(csv.contains("error,"));
    }

    #[test]
    fn test_csv_joins_paths_in_one_cell() {
        let rules = parse("User-agent: *\nDisallow: /a\nDisallow: /b");
        let result = analyze(&rules, None);
        let csv = to_csv(&result);
        assert!(csv.contains("/a; /b"));
    }

    #[test]
    fn test_csv_empty_crawl_delay_cell() {
        let rules = parse("User-agent: *\nDisallow: /a");
        let result = analyze(&rules, None);
        let csv = to_csv(&result);
        assert!(csv.contains("*,true,/a,,\n"));
    }

    #[test]
    fn test_csv_quotes_detail_text_with_commas() {
        let rules = parse("User-agent: googlebot\nDisallow: /wp-admin\nDisallow: /wp-json");
        let result = analyze(&rules, None);
        let csv = to_csv(&result);
        // The WordPress details list several paths separated by commas
        assert!(csv.contains("\"Not disallowed:"));
    }
}
