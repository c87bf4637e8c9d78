//! Wire types for the url_list endpoint

use serde::Deserialize;
use serde_json::Value;

/// Field names that may carry the URL in a url_list entry, tried in order.
/// The API is inconsistent about the casing of this field.
pub(crate) const URL_KEYS: [&str; 3] = ["URL", "url", "Url"];

/// One entry of the `url_list` array, kept as a raw JSON object so the URL
/// key can be resolved at extraction time.
pub type UrlEntry = serde_json::Map<String, Value>;

/// Response body of the url_list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UrlListResponse {
    /// Absent when the domain has no associated URLs
    #[serde(default)]
    pub url_list: Option<Vec<UrlEntry>>,
    /// Absent means there is nothing more to fetch
    #[serde(default)]
    pub has_next: Option<bool>,
}

/// Extract the URL from an entry.
///
/// The first key present in [`URL_KEYS`] order wins; an entry whose matched
/// key does not hold a string is skipped like an entry with no match.
pub fn extract_url(entry: &UrlEntry) -> Option<&str> {
    let value = URL_KEYS.iter().find_map(|key| entry.get(*key))?;
    value.as_str()
}

/// Outcome of fetching a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// A parsed page with its continuation flag
    Page {
        /// URLs extracted from this page, in response order
        urls: Vec<String>,
        /// Whether another page follows
        has_next: bool,
    },
    /// The response carried no `url_list` - normal end of data
    NoData,
    /// Upstream gateway timeout - remaining pages are unavailable, not an error
    GatewayTimeout,
}

impl PageOutcome {
    /// Check if this outcome carries page data
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }

    /// Check if this is a soft termination (no data or timeout)
    pub fn is_soft_termination(&self) -> bool {
        matches!(self, Self::NoData | Self::GatewayTimeout)
    }
}
