//! Selection session: the scan → select → render → copy cycle
//!
//! Holds the current folder list, the per-folder selection flags and the
//! last generated tree. Rendering only ever sees a snapshot of the flags.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardSink;
use crate::error::{MapError, MapResult};
use crate::tree::{
    FolderEntry, IgnoreSet, ScanReport, SkippedDir, TreeLine, TreeRenderer, join_lines,
    normalize_rel_path, scan,
};

/// Selected/expanded flag per folder, all false after a scan.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    flags: BTreeMap<String, bool>,
}

impl SelectionState {
    pub fn from_folders(folders: &[FolderEntry]) -> Self {
        Self {
            flags: folders.iter().map(|f| (f.path.clone(), false)).collect(),
        }
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.flags.get(path).copied().unwrap_or(false)
    }

    pub fn set(&mut self, path: &str, selected: bool) -> MapResult<()> {
        match self.flags.get_mut(path) {
            Some(flag) => {
                *flag = selected;
                Ok(())
            }
            None => Err(MapError::UnknownFolder(path.to_string())),
        }
    }

    pub fn set_all(&mut self, selected: bool) {
        for flag in self.flags.values_mut() {
            *flag = selected;
        }
    }

    /// Paths currently selected.
    pub fn snapshot(&self) -> BTreeSet<String> {
        self.flags
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(path, _)| path.clone())
            .collect()
    }
}

/// User-facing status after the last operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NoSubfolders,
    Ready { folders: usize },
    Generated,
    Copied,
    ClipboardFailed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoSubfolders => write!(f, "Ready (No subfolders found)"),
            Status::Ready { folders } => write!(f, "Ready. Found {} folders.", folders),
            Status::Generated => write!(f, "Structure Generated successfully."),
            Status::Copied => write!(f, "Copied to clipboard!"),
            Status::ClipboardFailed(msg) => write!(f, "Clipboard unavailable: {}", msg),
        }
    }
}

pub struct Session {
    base: PathBuf,
    renderer: TreeRenderer,
    ignore: IgnoreSet,
    report: ScanReport,
    selection: SelectionState,
    output: Option<String>,
    status: Status,
}

impl Session {
    /// Start a session on `base`, running the initial scan.
    pub fn new(base: impl Into<PathBuf>, ignore: IgnoreSet) -> Self {
        let mut session = Self {
            base: base.into(),
            renderer: TreeRenderer::new(ignore.clone()),
            ignore,
            report: ScanReport::default(),
            selection: SelectionState::default(),
            output: None,
            status: Status::NoSubfolders,
        };
        session.refresh();
        session
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn folders(&self) -> &[FolderEntry] {
        &self.report.folders
    }

    pub fn skipped(&self) -> &[SkippedDir] {
        &self.report.skipped
    }

    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Last generated tree, if any.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Rescan the base path. Replaces the folder list and clears every
    /// selection along with the last generated tree.
    pub fn refresh(&mut self) -> &ScanReport {
        self.report = scan(&self.base, &self.ignore);
        self.selection = SelectionState::from_folders(&self.report.folders);
        self.output = None;
        self.status = if self.report.is_empty() {
            Status::NoSubfolders
        } else {
            Status::Ready {
                folders: self.report.folders.len(),
            }
        };
        &self.report
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selection.is_selected(&normalize_rel_path(path))
    }

    pub fn set_selected(&mut self, path: &str, selected: bool) -> MapResult<()> {
        self.selection.set(&normalize_rel_path(path), selected)
    }

    /// Flip a folder's flag, returning the new value.
    pub fn toggle(&mut self, path: &str) -> MapResult<bool> {
        let path = normalize_rel_path(path);
        let next = !self.selection.is_selected(&path);
        self.selection.set(&path, next)?;
        Ok(next)
    }

    pub fn select_all(&mut self) {
        self.selection.set_all(true);
    }

    pub fn deselect_all(&mut self) {
        self.selection.set_all(false);
    }

    pub fn snapshot(&self) -> BTreeSet<String> {
        self.selection.snapshot()
    }

    /// Render the current selection without keeping the result.
    pub fn render_lines(&self) -> MapResult<Vec<TreeLine>> {
        self.renderer.render_lines(&self.base, &self.selection.snapshot())
    }

    /// Render the tree for the current selection and keep it as the last output.
    pub fn generate(&mut self) -> MapResult<&str> {
        let text = join_lines(&self.render_lines()?);
        self.status = Status::Generated;
        Ok(self.output.insert(text).as_str())
    }

    /// Copy the last generated tree to `sink`.
    pub fn copy_to(&mut self, sink: &mut dyn ClipboardSink) -> MapResult<()> {
        let text = match self.output.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(MapError::NothingToCopy),
        };
        match sink.set_text(text) {
            Ok(()) => {
                self.status = Status::Copied;
                Ok(())
            }
            Err(e) => {
                self.status = Status::ClipboardFailed(e.to_string());
                Err(e)
            }
        }
    }
}
