//! Tests for the output writer

use super::*;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_append_urls_writes_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let urls = vec!["http://a".to_string(), "http://b".to_string()];

    let path = append_urls(dir.path(), "example.com", &urls).unwrap();

    assert_eq!(path, dir.path().join("example.com.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "http://a\nhttp://b\n");
}

#[test]
fn test_append_urls_accumulates() {
    let dir = tempfile::tempdir().unwrap();
    let first = vec!["http://a".to_string()];
    let second = vec!["http://b".to_string(), "http://a".to_string()];

    append_urls(dir.path(), "example.com", &first).unwrap();
    append_urls(dir.path(), "example.com", &second).unwrap();

    // Append-only, no dedup
    let content = fs::read_to_string(dir.path().join("example.com.txt")).unwrap();
    assert_eq!(content, "http://a\nhttp://b\nhttp://a\n");
}

#[test]
fn test_append_urls_single_url_has_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let urls = vec!["http://only".to_string()];

    let path = append_urls(dir.path(), "example.com", &urls).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "http://only\n");
}

#[test]
fn test_append_urls_missing_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let urls = vec!["http://a".to_string()];

    let err = append_urls(&missing, "example.com", &urls).unwrap_err();
    assert!(matches!(err, crate::error::Error::Io(_)));
}
