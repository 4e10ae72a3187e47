use chrono::NaiveDate;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::utils::{collapse_whitespace, contains_any_keyword, truncate_chars};

/// Anchors with less visible text than this are navigation noise ("More", "PDF").
pub const MIN_TEXT_CHARS: usize = 5;
pub const MAX_TEXT_CHARS: usize = 150;

/// A single anchor that survived the length and keyword filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateLink {
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Notification Text")]
    pub text: String,
    #[serde(rename = "Link")]
    pub url: String,
    #[serde(rename = "Date Scraped")]
    pub date_scraped: NaiveDate,
}

/// Pulls every matching anchor out of `html`, resolving hrefs against `origin_url`.
///
/// Parsing is lenient: broken markup yields whatever anchors the parser recovers.
pub fn extract_candidates(
    html: &str,
    origin_url: &str,
    organization: &str,
    keywords: &[String],
    date_scraped: NaiveDate,
) -> Vec<CandidateLink> {
    let document = Html::parse_document(html);
    let anchor_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let mut candidates = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text = collapse_whitespace(anchor.text());

        if text.chars().count() < MIN_TEXT_CHARS {
            continue;
        }
        if !contains_any_keyword(&text, keywords) {
            log::debug!("{}: skipping '{}' (no keyword)", organization, text);
            continue;
        }

        candidates.push(CandidateLink {
            organization: organization.to_string(),
            text: truncate_chars(&text, MAX_TEXT_CHARS),
            url: normalize_href(href, origin_url),
            date_scraped,
        });
    }

    candidates
}

/// Best-effort absolute URL for `href` as found on the page at `origin_url`.
///
/// `../` segments and query-relative hrefs are not resolved, and a relative href
/// is always treated as sitting under the origin's last path segment.
pub fn normalize_href(href: &str, origin_url: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    if href.starts_with('/') {
        let site_root = origin_url.split('/').take(3).collect::<Vec<_>>().join("/");
        format!("{}{}", site_root, href)
    } else {
        format!("{}/{}", origin_url.trim_end_matches('/'), href)
    }
}
