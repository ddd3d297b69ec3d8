//! dirmap - pick the folders that matter and get a pasteable directory tree

pub mod clipboard;
pub mod error;
pub mod interactive;
pub mod output;
pub mod session;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use error::{MapError, MapResult};
pub use output::{OutputConfig, TreeFormatter, format_folder_list, print_json};
pub use session::{SelectionState, Session, Status};
pub use tree::{FolderEntry, IgnoreSet, ScanReport, TreeLine, TreeRenderer, render, scan};
