// src/output/paths.rs
//! Pure functions for path calculations and filename generation.
//!
//! This module handles all path-related operations without
//! performing any I/O operations.

use crate::constants::{PAGE_EXTENSION, UNTITLED};

/// Makes a single path segment out of an id or style type.
///
/// Separators and control characters become `_`, and names that would
/// resolve outside the parent directory fall back to `untitled`.
pub fn sanitize_segment(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let safe = safe.trim();

    if safe.is_empty() || safe == "." || safe == ".." {
        UNTITLED.to_string()
    } else {
        safe.to_string()
    }
}

/// File name of the page documenting the record with this id.
pub fn page_file_name(id: &str) -> String {
    format!("{}.{}", sanitize_segment(id), PAGE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_segment() {
        assert_eq!(sanitize_segment("fill"), "fill");
        assert_eq!(sanitize_segment("1:1"), "1:1");
        assert_eq!(sanitize_segment("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_segment("   spaces   "), "spaces");
        assert_eq!(sanitize_segment(".."), "untitled");
        assert_eq!(sanitize_segment(""), "untitled");
    }

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name("1:1"), "1:1.md");
        assert_eq!(page_file_name("../../etc/passwd"), ".._.._etc_passwd.md");
    }
}
