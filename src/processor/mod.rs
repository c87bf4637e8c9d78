//! Domain processing loop
//!
//! Drives the paginator for each input domain in sequence, drains the
//! collected URLs into memory, and persists non-empty collections to
//! per-domain files. A hard failure from one domain aborts only that
//! domain; the run continues with the next one and the failure is carried
//! in the report.

mod types;

pub use types::{DomainOutcome, RunReport, RunStats};

use crate::error::Result;
use crate::http::HttpClient;
use crate::otx::{PageOutcome, UrlPaginator, FIRST_PAGE};
use crate::output;
use std::path::PathBuf;
use tracing::{error, info};

/// Processes domains sequentially against the OTX API
#[derive(Debug)]
pub struct Processor {
    client: HttpClient,
    include_subdomains: bool,
    output_dir: PathBuf,
}

impl Processor {
    /// Create a new processor writing output files into `output_dir`
    pub fn new(client: HttpClient, include_subdomains: bool, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            include_subdomains,
            output_dir: output_dir.into(),
        }
    }

    /// Process each domain independently and in sequence
    pub async fn process(&self, domains: &[String]) -> RunReport {
        let mut report = RunReport::default();

        for domain in domains {
            println!("Fetching URLs for domain: {domain}");
            let outcome = self.process_domain(domain, &mut report.stats).await;

            match &outcome {
                DomainOutcome::Saved { path, count } => {
                    info!(domain, count, path = %path.display(), "saved URLs");
                    println!("URLs saved for domain: {domain}");
                }
                DomainOutcome::Empty => {
                    println!("No associated URLs found for the domain: {domain}");
                }
                DomainOutcome::Failed(err) => {
                    error!(domain, %err, "domain aborted");
                    eprintln!("Error while processing domain {domain}: {err}");
                }
            }

            report.outcomes.push((domain.clone(), outcome));
        }

        report
    }

    async fn process_domain(&self, domain: &str, stats: &mut RunStats) -> DomainOutcome {
        stats.add_domain();

        let urls = match self.collect(domain, stats).await {
            Ok(urls) => urls,
            Err(err) => {
                stats.add_failure();
                return DomainOutcome::Failed(err);
            }
        };

        stats.add_urls(urls.len());
        if urls.is_empty() {
            return DomainOutcome::Empty;
        }

        match output::append_urls(&self.output_dir, domain, &urls) {
            Ok(path) => DomainOutcome::Saved {
                path,
                count: urls.len(),
            },
            Err(err) => {
                stats.add_failure();
                DomainOutcome::Failed(err)
            }
        }
    }

    /// Drain the paginator for one domain into an ordered collection
    async fn collect(&self, domain: &str, stats: &mut RunStats) -> Result<Vec<String>> {
        let paginator = UrlPaginator::new(self.client.clone(), self.include_subdomains);
        let mut urls = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            let outcome = paginator.fetch_page(domain, page).await?;
            stats.add_page();

            match outcome {
                PageOutcome::Page {
                    urls: mut batch,
                    has_next,
                } => {
                    urls.append(&mut batch);
                    if !has_next {
                        return Ok(urls);
                    }
                    page += 1;
                }
                PageOutcome::NoData => return Ok(urls),
                PageOutcome::GatewayTimeout => {
                    println!("Timeout occurred. Skipping to the next domain...");
                    return Ok(urls);
                }
            }
        }
    }
}
