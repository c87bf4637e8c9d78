//! CLI runner - executes the run

use crate::cli::commands::Cli;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::processor::Processor;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the spider for the configured domains
    pub async fn run(&self) -> Result<()> {
        if self.cli.domains.iter().any(String::is_empty) {
            return Err(Error::config("a domain must be provided"));
        }

        let api_key = match self.cli.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => ClientConfig::api_key_from_env()?,
        };

        let config = ClientConfig::builder().api_key(api_key).build()?;
        info!(config = ?config, "starting run");

        let client = HttpClient::new(config)?;
        let processor = Processor::new(
            client,
            self.cli.include_subdomains,
            &self.cli.output_dir,
        );

        let report = processor.process(&self.cli.domains).await;

        let stats = &report.stats;
        println!(
            "Processed {} domain(s): {} URLs across {} pages",
            stats.domains_processed, stats.urls_collected, stats.pages_fetched
        );

        if report.has_failures() {
            return Err(Error::other(format!(
                "{} of {} domain(s) failed",
                stats.domains_failed, stats.domains_processed
            )));
        }

        Ok(())
    }
}
