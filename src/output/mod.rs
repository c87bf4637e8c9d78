//! Per-domain output files
//!
//! Collected URLs land in `{domain}.txt`, one per line, append-only.

mod writer;

pub use writer::append_urls;

#[cfg(test)]
mod tests;
