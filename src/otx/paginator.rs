//! Page loop for the url_list endpoint

use super::types::{extract_url, PageOutcome, UrlListResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use futures::stream::{self, Stream, TryStreamExt};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// The url_list endpoint is 1-based
pub(crate) const FIRST_PAGE: u32 = 1;

/// Issues sequential paged requests for one domain's associated URLs
pub struct UrlPaginator {
    client: HttpClient,
    include_subdomains: bool,
}

impl UrlPaginator {
    /// Create a paginator over the given client
    pub fn new(client: HttpClient, include_subdomains: bool) -> Self {
        Self {
            client,
            include_subdomains,
        }
    }

    fn endpoint(domain: &str) -> String {
        format!("/api/v1/indicators/domain/{domain}/url_list")
    }

    /// Fetch a single page and classify the outcome.
    ///
    /// A 504 is a soft termination, not an error: the remaining pages for
    /// this domain are treated as unavailable. Any other non-200 status is
    /// surfaced as [`Error::UnexpectedStatus`].
    pub async fn fetch_page(&self, domain: &str, page: u32) -> Result<PageOutcome> {
        let mut request = RequestConfig::new()
            .query("limit", self.client.config().page_size.to_string())
            .query("page", page.to_string());
        if self.include_subdomains {
            request = request.query("include_subdomains", "true");
        }

        let response = self
            .client
            .get_with_config(&Self::endpoint(domain), request)
            .await?;
        let status = response.status();

        if status == StatusCode::GATEWAY_TIMEOUT {
            warn!(domain, page, "gateway timeout, remaining pages unavailable");
            return Ok(PageOutcome::GatewayTimeout);
        }
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::unexpected_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let parsed: UrlListResponse = serde_json::from_str(&body)?;

        let Some(entries) = parsed.url_list else {
            debug!(domain, "response carried no url_list");
            return Ok(PageOutcome::NoData);
        };

        let urls: Vec<String> = entries
            .iter()
            .filter_map(|entry| extract_url(entry).map(str::to_owned))
            .collect();
        let has_next = parsed.has_next.unwrap_or(false);

        debug!(domain, page, count = urls.len(), has_next, "fetched page");
        Ok(PageOutcome::Page { urls, has_next })
    }

    /// Lazy, finite, non-restartable stream of URLs for one domain.
    ///
    /// Pages are fetched on demand starting at page 1 and advance only while
    /// the continuation flag is set. Soft terminations end the stream; a hard
    /// failure is yielded once and ends it.
    pub fn urls<'a>(&'a self, domain: &'a str) -> impl Stream<Item = Result<String>> + 'a {
        stream::try_unfold(Some(FIRST_PAGE), move |page| async move {
            let Some(current) = page else {
                return Ok::<_, Error>(None);
            };
            match self.fetch_page(domain, current).await? {
                PageOutcome::Page { urls, has_next } => {
                    let next = if has_next { Some(current + 1) } else { None };
                    Ok(Some((urls, next)))
                }
                PageOutcome::NoData | PageOutcome::GatewayTimeout => Ok(None),
            }
        })
        .map_ok(|urls| stream::iter(urls.into_iter().map(Ok::<String, Error>)))
        .try_flatten()
    }

    /// Drain the URL stream into a Vec, preserving arrival order
    pub async fn fetch_all(&self, domain: &str) -> Result<Vec<String>> {
        self.urls(domain).try_collect().await
    }
}

impl std::fmt::Debug for UrlPaginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlPaginator")
            .field("include_subdomains", &self.include_subdomains)
            .finish_non_exhaustive()
    }
}
