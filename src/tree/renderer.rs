//! TreeRenderer - turns a base path and a selection into a text tree

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs::DirEntry;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MapError, MapResult};

use super::config::IgnoreSet;
use super::filter::FolderFilter;
use super::line::{TreeLine, join_lines};
use super::utils::{get_name, normalize_rel_path};

/// Renders the directory tree below a base path.
///
/// Every non-ignored folder name is listed. Selection only decides whether a
/// folder's own files are listed; unselected folders carry a collapsed marker.
/// The root is always expanded.
pub struct TreeRenderer {
    ignore: IgnoreSet,
}

impl TreeRenderer {
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Render to a single text block, lines joined by `\n`.
    pub fn render(&self, base: &Path, selected: &BTreeSet<String>) -> MapResult<String> {
        self.render_lines(base, selected).map(|lines| join_lines(&lines))
    }

    /// Render to structured lines.
    ///
    /// Fails only when the base path itself cannot be read. Unreadable
    /// subfolders are still listed by their parent but contribute no lines
    /// of their own.
    pub fn render_lines(
        &self,
        base: &Path,
        selected: &BTreeSet<String>,
    ) -> MapResult<Vec<TreeLine>> {
        let entries = read_sorted_entries(base).map_err(|source| MapError::RootInaccessible {
            path: base.to_path_buf(),
            source,
        })?;

        let selected: BTreeSet<String> = selected.iter().map(|s| normalize_rel_path(s)).collect();

        let mut lines = vec![TreeLine::root(get_name(base))];
        self.render_dir(base, "", 0, entries, &selected, &mut lines);
        debug!("rendered {} lines for {}", lines.len(), base.display());
        Ok(lines)
    }

    /// Emit the block for one directory, then recurse into its subfolders.
    fn render_dir(
        &self,
        path: &Path,
        rel: &str,
        level: usize,
        entries: Vec<DirEntry>,
        selected: &BTreeSet<String>,
        lines: &mut Vec<TreeLine>,
    ) {
        let filter = FolderFilter::new(&self.ignore);
        let mut folders: Vec<OsString> = Vec::new();
        let mut files: Vec<OsString> = Vec::new();

        for entry in entries {
            let name = entry.file_name();
            match entry.file_type() {
                Ok(ft) if filter.is_pruned(&name, ft) => {}
                Ok(ft) if filter.is_folder(&name, ft) => folders.push(name),
                _ => files.push(name),
            }
        }

        let expanded = level == 0 || selected.contains(rel);
        if expanded {
            for name in &files {
                lines.push(TreeLine::file(level, name.to_string_lossy()));
            }
        }

        for name in &folders {
            let child_rel = join_rel(rel, &name.to_string_lossy());
            let collapsed = !selected.contains(&child_rel);
            lines.push(TreeLine::folder(level, name.to_string_lossy(), collapsed));
        }

        for name in &folders {
            let child_path = path.join(name);
            let child_rel = join_rel(rel, &name.to_string_lossy());
            match read_sorted_entries(&child_path) {
                Ok(child_entries) => {
                    self.render_dir(&child_path, &child_rel, level + 1, child_entries, selected, lines)
                }
                Err(e) => warn!("cannot read folder {}: {}", child_path.display(), e),
            }
        }
    }
}

/// Render `base` with the given ignore set and selection snapshot.
pub fn render(base: &Path, ignore: &IgnoreSet, selected: &BTreeSet<String>) -> MapResult<String> {
    TreeRenderer::new(ignore.clone()).render(base, selected)
}

/// Read directory entries sorted by file name. Entries that fail to read
/// are dropped.
fn read_sorted_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = std::fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

fn join_rel(rel: &str, name: &str) -> String {
    if rel.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", rel, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn selection(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    fn root_name(dir: &TempDir) -> String {
        get_name(dir.path())
    }

    #[test]
    fn test_unselected_folder_is_collapsed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# readme").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.py"), "print()").unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &BTreeSet::new()).unwrap();
        let expected = format!("{}/\n├── README.md\n├── 📂 src/ (Collapsed)", root_name(&dir));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_selected_folder_lists_its_files_one_level_deeper() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# readme").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.py"), "print()").unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &selection(&["src"])).unwrap();
        let expected = format!(
            "{}/\n├── README.md\n├── 📂 src/\n│   ├── main.py",
            root_name(&dir)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_siblings_sorted_files_before_folders() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("z")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &BTreeSet::new()).unwrap();
        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            body,
            vec![
                "├── a.txt",
                "├── b.txt",
                "├── 📂 a/ (Collapsed)",
                "├── 📂 z/ (Collapsed)",
            ]
        );
    }

    #[test]
    fn test_subfolders_of_collapsed_folder_still_listed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/utils")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "").unwrap();
        fs::write(dir.path().join("src/utils/io.rs"), "").unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &BTreeSet::new()).unwrap();
        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            body,
            vec!["├── 📂 src/ (Collapsed)", "│   ├── 📂 utils/ (Collapsed)"]
        );
    }

    #[test]
    fn test_selected_nested_folder_under_collapsed_parent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/utils")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "").unwrap();
        fs::write(dir.path().join("src/utils/io.rs"), "").unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &selection(&["src/utils"])).unwrap();
        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            body,
            vec![
                "├── 📂 src/ (Collapsed)",
                "│   ├── 📂 utils/",
                "│   │   ├── io.rs",
            ]
        );
    }

    #[test]
    fn test_directory_blocks_precede_child_blocks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/inner")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/inner/x.txt"), "").unwrap();
        fs::write(dir.path().join("b/y.txt"), "").unwrap();

        let sel = selection(&["a", "a/inner", "b"]);
        let out = render(dir.path(), &IgnoreSet::default(), &sel).unwrap();
        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            body,
            vec![
                "├── 📂 a/",
                "├── 📂 b/",
                "│   ├── 📂 inner/",
                "│   │   ├── x.txt",
                "│   ├── y.txt",
            ]
        );
    }

    #[test]
    fn test_ignored_directories_never_rendered() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::create_dir_all(dir.path().join("src/__pycache__")).unwrap();
        fs::write(dir.path().join("src/__pycache__/m.pyc"), "").unwrap();
        fs::write(dir.path().join("dist"), "not a folder").unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &selection(&["src"])).unwrap();
        assert!(!out.contains("node_modules"));
        assert!(!out.contains("__pycache__"));
        assert!(!out.contains("m.pyc"));
        assert!(out.contains("├── dist"), "files named like ignored dirs stay: {}", out);
    }

    #[test]
    fn test_selection_paths_are_normalized() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/utils")).unwrap();
        fs::write(dir.path().join("src/utils/io.rs"), "").unwrap();

        let plain = render(dir.path(), &IgnoreSet::default(), &selection(&["src/utils"])).unwrap();
        let messy = render(dir.path(), &IgnoreSet::default(), &selection(&["./src\\utils/"])).unwrap();
        assert_eq!(plain, messy);
    }

    #[test]
    fn test_render_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/one.txt"), "").unwrap();
        fs::write(dir.path().join("top.txt"), "").unwrap();

        let sel = selection(&["a"]);
        let first = render(dir.path(), &IgnoreSet::default(), &sel).unwrap();
        let second = render(dir.path(), &IgnoreSet::default(), &sel).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = render(&missing, &IgnoreSet::default(), &BTreeSet::new()).unwrap_err();
        assert!(matches!(err, MapError::RootInaccessible { .. }));
    }

    #[test]
    fn test_file_as_root_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        assert!(render(&file, &IgnoreSet::default(), &BTreeSet::new()).is_err());
    }

    #[test]
    fn test_empty_root_renders_only_root_line() {
        let dir = TempDir::new().unwrap();
        let out = render(dir.path(), &IgnoreSet::default(), &BTreeSet::new()).unwrap();
        assert_eq!(out, format!("{}/", root_name(&dir)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dir_rendered_as_entry_not_followed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let out = render(dir.path(), &IgnoreSet::default(), &selection(&["link"])).unwrap();
        assert!(out.contains("├── link"), "symlink listed as plain entry: {}", out);
        assert!(!out.contains("📂 link/"));
        assert_eq!(out.matches("inside.txt").count(), 0);
    }
}
