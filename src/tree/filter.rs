//! Folder filtering shared by the scanner and the renderer

use std::ffi::OsStr;
use std::fs::FileType;

use super::config::IgnoreSet;

/// Decides which directory entries count as folders.
///
/// An entry is a folder when it is a real directory (symlinks are never
/// followed) whose name is not in the ignore set.
pub struct FolderFilter<'a>(&'a IgnoreSet);

impl<'a> FolderFilter<'a> {
    pub fn new(ignore: &'a IgnoreSet) -> Self {
        Self(ignore)
    }

    /// Check if an entry should be treated as a folder to list and descend into.
    pub fn is_folder(&self, name: &OsStr, file_type: FileType) -> bool {
        file_type.is_dir() && !self.0.is_ignored(name)
    }

    /// Check if an entry is a pruned directory that must be skipped entirely.
    pub fn is_pruned(&self, name: &OsStr, file_type: FileType) -> bool {
        file_type.is_dir() && self.0.is_ignored(name)
    }
}
