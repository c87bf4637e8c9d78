//! Paged retrieval from the OTX url_list endpoint
//!
//! # Overview
//!
//! - [`UrlPaginator`] - issues one GET per page and classifies the outcome
//! - [`PageOutcome`] - explicit page result: data, no data, or soft timeout
//! - [`UrlPaginator::urls`] - lazy, finite, non-restartable URL stream

mod paginator;
mod types;

pub use paginator::UrlPaginator;
pub(crate) use paginator::FIRST_PAGE;
pub use types::{extract_url, PageOutcome, UrlEntry, UrlListResponse};
