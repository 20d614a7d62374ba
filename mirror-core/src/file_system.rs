//! File system helpers for locating and reading project files.

use std::fs;
use std::path::{Path, PathBuf};

/// Check if a file exists in a directory
pub fn has_file(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}

/// Read a file as UTF-8, yielding an empty string if it is missing or unreadable
pub fn read_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "treating unreadable file as empty");
            String::new()
        }
    }
}

/// Walk from `start` up to the filesystem root and return the first existing
/// `dir/<name>`, trying `filenames` in order within each directory.
pub fn find_in_ancestors(start: &Path, filenames: &[&str]) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if let Some(name) = filenames.iter().find(|&&name| has_file(dir, name)) {
            return Some(dir.join(name));
        }
        current = dir.parent();
    }
    None
}
