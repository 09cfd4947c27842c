//! CLI entry point for sprig

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};

use sprig::{TreeWalker, WalkerConfig};

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
#[command(name = "sprig")]
#[command(about = "Display a directory as a tree with branch connectors")]
#[command(version)]
struct Args {
    /// The directory to list
    directory: PathBuf,

    /// All files are listed, including hidden ones
    #[arg(short = 'a')]
    all: bool,

    /// List directories only
    #[arg(short = 'd', conflicts_with = "files")]
    dirs: bool,

    /// List files only
    #[arg(short = 'f')]
    files: bool,

    /// Max display depth of the directory tree
    #[arg(short = 'p', value_name = "MAXDEPTH")]
    max_depth: Option<usize>,

    /// Print the full path prefix for each entry
    #[arg(short = 't')]
    full_paths: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = match fs::canonicalize(&args.directory) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("sprig: cannot access '{}': {}", args.directory.display(), e);
            process::exit(1);
        }
    };

    let config = WalkerConfig {
        show_hidden: args.all,
        dirs_only: args.dirs,
        files_only: args.files,
        max_depth: args.max_depth,
        full_paths: args.full_paths,
    };

    let choice = if should_use_color(args.color) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Err(e) = TreeWalker::new(config).walk(&root, &mut stdout) {
        eprintln!("sprig: cannot list '{}': {}", root.display(), e);
        process::exit(1);
    }
}
