//! Shared path helpers for scanning and rendering

use std::path::{Component, Path};

/// Separator used for relative folder paths, independent of platform.
pub const SEPARATOR: char = '/';

/// Get the display name of a directory, falling back to the full path when
/// it has no final component (e.g. `/`).
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Express `path` relative to `base` using `/` separators.
///
/// Returns `None` when `path` is not below `base`. The base itself maps to
/// an empty string.
pub fn relative_path(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    Some(segments.join("/"))
}

/// Normalize a user-supplied relative folder path so that it compares equal
/// to the paths produced by the scanner.
///
/// Backslashes become `/`, `.` and empty segments are dropped, so `./src/`,
/// `src//` and `src\` all normalize to `src`.
pub fn normalize_rel_path(raw: &str) -> String {
    raw.replace('\\', "/")
        .split(SEPARATOR)
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Number of separators in a normalized relative path.
pub fn depth_of(rel_path: &str) -> usize {
    rel_path.matches(SEPARATOR).count()
}
