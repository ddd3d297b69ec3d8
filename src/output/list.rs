//! Folder checklist output

use std::collections::BTreeSet;

use crate::tree::FolderEntry;

pub const NO_SUBFOLDERS: &str = "No subfolders found.";

/// Spaces per depth level in the checklist.
const LIST_INDENT: &str = "    ";

/// Format the selectable folders, one per line, indented by depth.
///
/// With a selection, each line carries a 1-based index and a `[x]`/`[ ]`
/// marker so the entries can be toggled by number.
pub fn format_folder_list(folders: &[FolderEntry], selected: Option<&BTreeSet<String>>) -> String {
    if folders.is_empty() {
        return NO_SUBFOLDERS.to_string();
    }

    let width = folders.len().to_string().len();
    folders
        .iter()
        .enumerate()
        .map(|(i, folder)| {
            let indent = LIST_INDENT.repeat(folder.depth);
            match selected {
                Some(sel) => {
                    let mark = if sel.contains(&folder.path) { "x" } else { " " };
                    format!("{:>width$}. [{}] {}{}", i + 1, mark, indent, folder.path)
                }
                None => format!("{}{}", indent, folder.path),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
