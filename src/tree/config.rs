//! Configuration types for folder scanning and tree rendering

use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Directory names that are never listed, selected or descended into.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".next",
    "venv",
    "dist",
    "build",
    ".idea",
    ".vscode",
];

/// Fixed set of directory names excluded from scanning and rendering.
///
/// Matching is by exact entry name and only applies to directories: a
/// regular file called `build` is still rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// An ignore set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check a raw directory entry name. Names that are not valid UTF-8 can
    /// never match.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.contains(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS.iter().copied())
    }
}
