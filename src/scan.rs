//! Directory scanning
//!
//! Walks a directory tree depth-first, classifies every file, and probes
//! the encoding of each text file. The walk prunes dependency caches,
//! version-control metadata, and build output directories by name.

use std::fs;
use std::path::Path;

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::classify::is_text_file;
use crate::probe::probe_bytes;

/// Directory names never descended into, at any depth.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".next", "dist"];

/// One flagged file: path relative to the scan root plus its status line.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub path: String,
    pub status: String,
}

/// Aggregate result of one directory scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Every non-directory entry visited.
    pub total_files: u64,
    /// Entries that classified as text and were probed.
    pub checked_files: u64,
    /// Flagged files, in traversal order.
    pub issues: Vec<Issue>,
}

fn is_pruned(entry: &DirEntry) -> bool {
    // depth 0 is the scan root itself; only subdirectories are excluded
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Path relative to root, '/'-separated for cross-platform consistency.
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Scan every file under `root` and report files whose encoding could not
/// be confirmed.
///
/// Per-file problems never abort the scan: unreadable entries are skipped,
/// and a read failure while probing is flagged as an issue for that file.
pub fn scan_directory(root: &Path) -> ScanReport {
    let mut report = ScanReport::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        report.total_files += 1;

        if !is_text_file(path) {
            continue;
        }
        report.checked_files += 1;

        let (is_ok, status) = match fs::read(path) {
            Ok(bytes) => {
                let outcome = probe_bytes(&bytes);
                (outcome.is_ok(), outcome.status())
            }
            Err(err) => (false, format!("Error: {}", err)),
        };

        if !is_ok || status.to_lowercase().contains("issue") {
            report.issues.push(Issue {
                path: relative_display(path, root),
                status,
            });
        }
    }

    report
}
