//! Rendered tree lines

use std::fmt;

/// Prefix repeated once per level of nesting.
pub const INDENT_UNIT: &str = "│   ";
pub const CONNECTOR: &str = "├── ";
pub const FOLDER_GLYPH: &str = "📂 ";
pub const COLLAPSED_MARKER: &str = " (Collapsed)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// The base directory itself, always the first line.
    Root { name: String },
    File { name: String },
    Folder { name: String, collapsed: bool },
}

/// One line of rendered output. `level` is the nesting level of the
/// directory that contains the entry; the root line sits at level 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub level: usize,
    pub kind: LineKind,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            level: 0,
            kind: LineKind::Root { name: name.into() },
        }
    }

    pub fn file(level: usize, name: impl Into<String>) -> Self {
        Self {
            level,
            kind: LineKind::File { name: name.into() },
        }
    }

    pub fn folder(level: usize, name: impl Into<String>, collapsed: bool) -> Self {
        Self {
            level,
            kind: LineKind::Folder {
                name: name.into(),
                collapsed,
            },
        }
    }

    /// Indent and connector that precede the entry name.
    pub fn prefix(&self) -> String {
        match self.kind {
            LineKind::Root { .. } => String::new(),
            _ => format!("{}{}", INDENT_UNIT.repeat(self.level), CONNECTOR),
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LineKind::Root { name } => write!(f, "{}/", name),
            LineKind::File { name } => write!(f, "{}{}", self.prefix(), name),
            LineKind::Folder { name, collapsed } => {
                write!(f, "{}{}{}/", self.prefix(), FOLDER_GLYPH, name)?;
                if *collapsed {
                    f.write_str(COLLAPSED_MARKER)?;
                }
                Ok(())
            }
        }
    }
}

/// Join lines with `\n`, without a trailing newline.
pub fn join_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
