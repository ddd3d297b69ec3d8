//! CLI entry point for dirmap

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::interactive;
use dirmap::{
    ClipboardSink, IgnoreSet, OutputConfig, Session, SystemClipboard, TreeFormatter,
    format_folder_list, print_json,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Pick the folders that matter and get a pasteable directory tree")]
#[command(version)]
struct Args {
    /// Directory to map
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Expand a folder: list its files (relative path, can be used multiple times)
    #[arg(short = 'e', long = "expand", value_name = "FOLDER")]
    expand: Vec<String>,

    /// Expand every folder
    #[arg(short = 'A', long = "expand-all", conflicts_with = "expand")]
    expand_all: bool,

    /// List the selectable folders instead of rendering the tree
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Print the folder list as JSON (requires --list)
    #[arg(long = "json", requires = "list")]
    json: bool,

    /// Also copy the rendered tree to the system clipboard
    #[arg(short = 'c', long = "copy")]
    copy: bool,

    /// Select folders from a numbered checklist, then generate and copy
    #[arg(short = 'i', long = "interactive", conflicts_with_all = ["list", "expand", "expand_all"])]
    interactive: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let base = match args.path.canonicalize() {
        Ok(p) if p.is_dir() => p,
        Ok(_) => {
            eprintln!("dirmap: '{}' is not a directory", args.path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dirmap: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let mut session = Session::new(base, IgnoreSet::default());

    if args.interactive {
        let mut clipboard = SystemClipboard::new();
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        if let Err(e) = interactive::run(&mut session, &mut clipboard, stdin.lock(), &mut stdout) {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }
        return;
    }

    for skipped in session.skipped() {
        eprintln!("dirmap: warning: {}", skipped.to_error());
    }

    let result = if args.list {
        if args.json {
            print_json(session.report())
        } else {
            println!("{}", format_folder_list(session.folders(), None));
            eprintln!("{}", session.status());
            Ok(())
        }
    } else {
        if args.expand_all {
            session.select_all();
        }
        for folder in &args.expand {
            if let Err(e) = session.set_selected(folder, true) {
                eprintln!("dirmap: warning: {}", e);
            }
        }
        render_tree(&session, &args)
    };

    if let Err(e) = result {
        eprintln!("dirmap: error writing output: {}", e);
        process::exit(1);
    }
}

/// Render the current selection to stdout and optionally the clipboard.
fn render_tree(session: &Session, args: &Args) -> std::io::Result<()> {
    let lines = match session.render_lines() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }
    };

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    formatter.print(&lines)?;

    if args.copy {
        let mut clipboard = SystemClipboard::new();
        match clipboard.set_text(&formatter.format(&lines)) {
            Ok(()) => eprintln!("Copied to clipboard!"),
            Err(e) => eprintln!("dirmap: warning: {}", e),
        }
    }
    Ok(())
}
