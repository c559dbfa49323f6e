use crate::parser::directive::{parse_line, Directive};
use serde::{Deserialize, Serialize};

/// One rule block per distinct user-agent token
///
/// Repeated `User-agent:` lines for the same token merge into a single
/// record: later directive lines append to the existing sequences rather
/// than creating a duplicate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    /// Lowercased crawler token this block applies to; `*` is the global rule
    pub user_agent: String,

    /// Disallowed path patterns in source order (duplicates allowed)
    pub disallow: Vec<String>,

    /// Allowed path patterns in source order
    pub allow: Vec<String>,

    /// Crawl delay in seconds; last occurrence wins, `NaN` passes through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<f64>,

    /// Sitemap URLs attached to this block, original case preserved
    pub sitemaps: Vec<String>,
}

impl RuleRecord {
    /// Creates an empty rule record for the given user-agent token
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            disallow: Vec::new(),
            allow: Vec::new(),
            crawl_delay: None,
            sitemaps: Vec::new(),
        }
    }

    /// Returns true if this is the global (`*`) rule
    pub fn is_global(&self) -> bool {
        self.user_agent == "*"
    }
}

/// Parses robots.txt content into an ordered list of rule records
///
/// The records keep source insertion order, except that the global (`*`)
/// record is always moved to the front of the list. Parsing never fails:
/// unrecognized directives and orphaned `Allow:`/`Disallow:`/`Crawl-delay:`
/// lines (ones with no preceding `User-agent:`) are silently dropped.
///
/// A `Sitemap:` line is attached to the current record if one exists, to the
/// most recently created record otherwise, and if the file declares a sitemap
/// before any rule at all, a global record is synthesized to hold it. The
/// synthesized record does not become current, so orphaned path directives
/// after it are still dropped.
///
/// # Arguments
///
/// * `content` - Raw robots.txt text (may be empty or malformed)
///
/// # Returns
///
/// The parsed rule records, global rule first
pub fn parse(content: &str) -> Vec<RuleRecord> {
    let mut records: Vec<RuleRecord> = Vec::new();
    let mut current: Option<usize> = None;

    for line in content.lines() {
        let Some(directive) = parse_line(line) else {
            continue;
        };

        match directive {
            Directive::UserAgent(agent) => {
                // Merge semantics: an already-seen token reopens its record
                let index = match records.iter().position(|r| r.user_agent == agent) {
                    Some(index) => index,
                    None => {
                        records.push(RuleRecord::new(agent));
                        records.len() - 1
                    }
                };
                current = Some(index);
            }
            Directive::Disallow(path) => {
                if let Some(index) = current {
                    records[index].disallow.push(path);
                }
            }
            Directive::Allow(path) => {
                if let Some(index) = current {
                    records[index].allow.push(path);
                }
            }
            Directive::CrawlDelay(delay) => {
                if let Some(index) = current {
                    records[index].crawl_delay = Some(delay);
                }
            }
            Directive::Sitemap(sitemap_url) => {
                if let Some(index) = current {
                    records[index].sitemaps.push(sitemap_url);
                } else if let Some(last) = records.last_mut() {
                    last.sitemaps.push(sitemap_url);
                } else {
                    // Leading Sitemap: line before any User-agent: still
                    // surfaces in the output via a synthesized global record
                    let mut record = RuleRecord::new("*");
                    record.sitemaps.push(sitemap_url);
                    records.push(record);
                }
            }
        }
    }

    promote_global(&mut records);
    records
}

/// Moves the global (`*`) record to the front, preserving the relative
/// order of all other records
fn promote_global(records: &mut Vec<RuleRecord>) {
    if let Some(position) = records.iter().position(|r| r.is_global()) {
        if position > 0 {
            let global = records.remove(position);
            records.insert(0, global);
        }
    }
}
