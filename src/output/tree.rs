//! Tree formatter for rendered lines
//!
//! `TreeFormatter` turns `TreeLine`s into plain text (the pasteable form)
//! or prints them to the console with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{COLLAPSED_MARKER, FOLDER_GLYPH, LineKind, TreeLine, join_lines};

use super::config::OutputConfig;

/// Formatter for rendered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Plain text, byte-identical to what the renderer produces.
    pub fn format(&self, lines: &[TreeLine]) -> String {
        join_lines(lines)
    }

    pub fn print(&self, lines: &[TreeLine]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_lines(&mut stdout, lines)
    }

    /// Write lines to any color-capable writer, one per line.
    pub fn write_lines<W: WriteColor>(&self, out: &mut W, lines: &[TreeLine]) -> io::Result<()> {
        for line in lines {
            self.write_line(out, line)?;
        }
        Ok(())
    }

    fn write_line<W: WriteColor>(&self, out: &mut W, line: &TreeLine) -> io::Result<()> {
        match &line.kind {
            LineKind::Root { name } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}/", name)?;
                out.reset()?;
            }
            LineKind::File { name } => {
                write!(out, "{}", line.prefix())?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(out, "{}", name)?;
                out.reset()?;
            }
            LineKind::Folder { name, collapsed } => {
                write!(out, "{}{}", line.prefix(), FOLDER_GLYPH)?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}/", name)?;
                out.reset()?;
                if *collapsed {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                    write!(out, "{}", COLLAPSED_MARKER)?;
                    out.reset()?;
                }
            }
        }
        writeln!(out)
    }
}
