//! HTTP transport
//!
//! A thin wrapper over reqwest that handles base-URL joining, the default
//! timeout and user agent, and the API-key header. Status codes are passed
//! through untouched; classifying them is the paginator's job.

mod client;

pub use client::{HttpClient, RequestConfig};

#[cfg(test)]
mod tests;
