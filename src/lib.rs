//! # otx-spider
//!
//! A small client for the AlienVault OTX threat-intelligence API that
//! collects the URLs associated with a domain and appends them to a
//! per-domain text file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use otx_spider::{ClientConfig, HttpClient, Processor, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .api_key(ClientConfig::api_key_from_env()?)
//!         .build()?;
//!
//!     let client = HttpClient::new(config)?;
//!     let processor = Processor::new(client, false, ".");
//!     let report = processor.process(&["example.com".to_string()]).await;
//!
//!     println!("collected {} URLs", report.stats.urls_collected);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  Domain Processor                    │
//! │  process(domains) → per-domain outcome + run stats   │
//! └──────────────────────────────────────────────────────┘
//!                │                         │
//! ┌──────────────┴───────────┐  ┌──────────┴─────────────┐
//! │       API Paginator      │  │      Output Writer     │
//! │  fetch_page / urls()     │  │  {domain}.txt append   │
//! └──────────────────────────┘  └────────────────────────┘
//!                │
//! ┌──────────────┴───────────┐
//! │  HTTP client + API key   │
//! └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the crate
pub mod error;

/// Client configuration
pub mod config;

/// API-key request authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Paged retrieval from the OTX url_list endpoint
pub mod otx;

/// Per-domain output files
pub mod output;

/// Domain processing loop
pub mod processor;

/// Command-line interface
pub mod cli;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::HttpClient;
pub use otx::{PageOutcome, UrlPaginator};
pub use processor::{Processor, RunReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
