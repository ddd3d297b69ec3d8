//! Scanner - collects the selectable subfolders of a base path

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Serialize;
use tracing::debug;

use crate::error::MapError;

use super::config::IgnoreSet;
use super::filter::FolderFilter;
use super::utils::{depth_of, relative_path};

/// A subfolder of the base path, identified by its `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FolderEntry {
    pub path: String,
    pub depth: usize,
}

impl FolderEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let depth = depth_of(&path);
        Self { path, depth }
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A directory the scanner could not read. The rest of the scan is unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedDir {
    pub fn to_error(&self) -> MapError {
        MapError::ScanPartialFailure {
            path: self.path.clone(),
            reason: self.reason.clone(),
        }
    }
}

/// Result of one scan pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Folders sorted by relative path.
    pub folders: Vec<FolderEntry>,
    pub skipped: Vec<SkippedDir>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn contains(&self, rel_path: &str) -> bool {
        self.folders
            .binary_search_by(|f| f.path.as_str().cmp(rel_path))
            .is_ok()
    }
}

/// Walk `base` recursively and collect every non-ignored subfolder.
///
/// Ignored directories are pruned, so nothing below them is visited.
/// Unreadable directories are recorded in [`ScanReport::skipped`] and the
/// walk carries on with the remaining entries.
pub fn scan(base: &Path, ignore: &IgnoreSet) -> ScanReport {
    let walk_ignore = ignore.clone();
    let walker = WalkBuilder::new(base)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| match entry.file_type() {
            Some(ft) => !FolderFilter::new(&walk_ignore).is_pruned(entry.file_name(), ft),
            None => true,
        })
        .build();

    let filter = FolderFilter::new(ignore);
    let mut report = ScanReport::default();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let path = error_path(&err).unwrap_or_else(|| base.to_path_buf());
                debug!("skipping unreadable folder {}: {}", path.display(), err);
                report.skipped.push(SkippedDir {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let is_folder = entry
            .file_type()
            .is_some_and(|ft| filter.is_folder(entry.file_name(), ft));
        if !is_folder {
            continue;
        }

        if let Some(rel) = relative_path(entry.path(), base) {
            report.folders.push(FolderEntry::new(rel));
        }
    }

    report.folders.sort();
    debug!(
        "scanned {}: {} folders, {} skipped",
        base.display(),
        report.folders.len(),
        report.skipped.len()
    );
    report
}

/// Dig the offending path out of a walk error, if it carries one.
fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
