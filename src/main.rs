//! get-todos: consolidate open Markdown todos from a notes folder.
//!
//! Walks the notes tree, collects unchecked task-list lines from every
//! Markdown file, groups them by folder, and writes one `open_todos.md`
//! at the root of the tree.

mod config;
mod extractor;
mod formatter;
mod report;
mod scanner;
mod writer;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::NotesConfig;

#[derive(Parser, Debug)]
#[command(name = "get-todos", about = "Extract and consolidate todos from Markdown notes")]
struct Args {
    /// Path to the notes folder
    notes_path: PathBuf,

    /// Path to get-todos.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays reserved for status lines.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = NotesConfig::load(args.config.as_deref());

    match run(&args.notes_path, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::error(&e);
            ExitCode::FAILURE
        }
    }
}

/// One extraction run: scan, parse, write. Per-file read failures are
/// logged and skipped; only path validation and the final write can fail.
fn run(notes_path: &Path, config: &NotesConfig) -> Result<(), String> {
    let notes = scanner::NoteScanner::new(notes_path, config)?.walk_notes();

    let records: Vec<_> = notes
        .iter()
        .filter_map(|note_path| extractor::todos_from_note(note_path, &config.todo_marker))
        .collect();
    info!(
        "Collected todos from {} of {} notes",
        records.len(),
        notes.len()
    );

    writer::save_todos(notes_path, config, &records)
}
