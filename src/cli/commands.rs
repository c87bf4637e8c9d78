//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// AlienVault OTX URL spider
#[derive(Parser, Debug)]
#[command(name = "otx-spider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain to fetch URLs for (repeat the flag for multiple domains)
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN", required = true)]
    pub domains: Vec<String>,

    /// Include subdomain results
    #[arg(
        short = 's',
        long = "include-subdomains",
        alias = "include_subdomains"
    )]
    pub include_subdomains: bool,

    /// OTX API key (falls back to the OTX_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Directory for the per-domain output files
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
