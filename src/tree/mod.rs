//! Folder scanning and tree rendering
//!
//! Two passes over the same base path, neither of which touches the
//! filesystem beyond reading it:
//!
//! - `scan`: collects every selectable subfolder (best effort)
//! - `TreeRenderer`: produces the text tree for a selection snapshot

mod config;
mod filter;
mod line;
mod renderer;
mod scanner;
mod utils;

pub use config::{DEFAULT_IGNORED_DIRS, IgnoreSet};
pub use filter::FolderFilter;
pub use line::{COLLAPSED_MARKER, CONNECTOR, FOLDER_GLYPH, INDENT_UNIT, LineKind, TreeLine, join_lines};
pub use renderer::{TreeRenderer, render};
pub use scanner::{FolderEntry, ScanReport, SkippedDir, scan};
pub use utils::{get_name, normalize_rel_path};
