//! Append-only URL file writer

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append `urls` to `{dir}/{domain}.txt`, one per line with a trailing
/// newline, and return the file path.
///
/// The file is created on first use and the handle is scoped to this call,
/// so it is released on every exit path. No deduplication; lines keep
/// arrival order. Callers skip empty collections, which leave no file
/// side effect.
pub fn append_urls(dir: &Path, domain: &str, urls: &[String]) -> Result<PathBuf> {
    debug_assert!(!urls.is_empty());

    let path = dir.join(format!("{domain}.txt"));
    let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
    file.write_all(urls.join("\n").as_bytes())?;
    file.write_all(b"\n")?;

    debug!(path = %path.display(), count = urls.len(), "appended URLs");
    Ok(path)
}
