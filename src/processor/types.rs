//! Processor types
//!
//! Per-domain outcomes and aggregate run statistics.

use crate::error::Error;
use std::path::PathBuf;

/// Result of processing one domain
#[derive(Debug)]
pub enum DomainOutcome {
    /// URLs were collected and appended to the output file
    Saved {
        /// Path of the output file
        path: PathBuf,
        /// Number of URLs appended
        count: usize,
    },
    /// Pagination finished with nothing to write
    Empty,
    /// A hard failure aborted this domain; later domains still run
    Failed(Error),
}

impl DomainOutcome {
    /// Check if this outcome is a hard failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Statistics aggregated over a run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Domains processed (including failed ones)
    pub domains_processed: usize,
    /// Domains aborted by a hard failure
    pub domains_failed: usize,
    /// Pages fetched across all domains
    pub pages_fetched: usize,
    /// URLs collected across all domains
    pub urls_collected: usize,
}

impl RunStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a processed domain
    pub fn add_domain(&mut self) {
        self.domains_processed += 1;
    }

    /// Count a failed domain
    pub fn add_failure(&mut self) {
        self.domains_failed += 1;
    }

    /// Count a fetched page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Count collected URLs
    pub fn add_urls(&mut self, count: usize) {
        self.urls_collected += count;
    }
}

/// Report of a full run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-domain outcomes, in processing order
    pub outcomes: Vec<(String, DomainOutcome)>,
    /// Aggregate statistics
    pub stats: RunStats,
}

impl RunReport {
    /// Check if any domain hard-failed
    pub fn has_failures(&self) -> bool {
        self.stats.domains_failed > 0
    }
}
