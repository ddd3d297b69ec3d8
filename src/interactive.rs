//! Line-oriented selection session for terminals
//!
//! Shows the numbered folder checklist and reads commands until `quit` or
//! end of input. Numbers toggle folders; the remaining commands mirror the
//! all/none/refresh/generate/copy actions of the session.

use std::io::{self, BufRead, Write};

use crate::clipboard::ClipboardSink;
use crate::error::MapError;
use crate::output::format_folder_list;
use crate::session::Session;

const HELP: &str = "\
Commands:
  <n> [<n>...]   toggle folders by number (e.g. `1 3 4`)
  all | none     select or clear every folder
  refresh        rescan the folder and clear the selection
  list           show the checklist again
  generate | g   render the tree for the current selection
  copy | c       copy the last generated tree to the clipboard
  help           show this help
  quit | q       leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Toggle(Vec<usize>),
    SelectAll,
    SelectNone,
    Refresh,
    List,
    Generate,
    Copy,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "all" => Command::SelectAll,
        "none" => Command::SelectNone,
        "refresh" | "r" => Command::Refresh,
        "list" | "ls" => Command::List,
        "generate" | "g" => Command::Generate,
        "copy" | "c" => Command::Copy,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => {
            let numbers: Result<Vec<usize>, _> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect();
            match numbers {
                Ok(n) => Command::Toggle(n),
                Err(_) => Command::Unknown(line.to_string()),
            }
        }
    }
}

fn write_checklist<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let snapshot = session.snapshot();
    writeln!(out, "{}", format_folder_list(session.folders(), Some(&snapshot)))?;
    writeln!(out, "{}", session.status())
}

/// Run the session loop over `input`/`out` until quit or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    clipboard: &mut dyn ClipboardSink,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for skipped in session.skipped() {
        writeln!(out, "warning: {}", skipped.to_error())?;
    }
    write_checklist(session, out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::List => write_checklist(session, out)?,
            Command::SelectAll => {
                session.select_all();
                write_checklist(session, out)?;
            }
            Command::SelectNone => {
                session.deselect_all();
                write_checklist(session, out)?;
            }
            Command::Refresh => {
                session.refresh();
                write_checklist(session, out)?;
            }
            Command::Toggle(numbers) => {
                for n in numbers {
                    let path = n
                        .checked_sub(1)
                        .and_then(|i| session.folders().get(i))
                        .map(|f| f.path.clone());
                    match path {
                        Some(path) => {
                            session.toggle(&path).map_err(io::Error::other)?;
                        }
                        None => writeln!(out, "no folder numbered {}", n)?,
                    }
                }
                write_checklist(session, out)?;
            }
            Command::Generate => match session.generate() {
                Ok(text) => {
                    writeln!(out, "{}", text)?;
                    writeln!(out, "{}", session.status())?;
                }
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            Command::Copy => match session.copy_to(clipboard) {
                Ok(()) => writeln!(out, "{}", session.status())?,
                Err(MapError::NothingToCopy) => {
                    writeln!(out, "Nothing to copy! Generate the tree first.")?
                }
                Err(e) => writeln!(out, "warning: {}", e)?,
            },
            Command::Unknown(cmd) => writeln!(out, "unknown command '{}', try `help`", cmd)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
