//! Todo extraction from a single note file.

use std::fs;
use std::path::Path;
use tracing::error;

/// Todos extracted from one note file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTodoRecord {
    /// Name of the immediate parent directory (not a full path).
    pub folder: String,
    /// Base name of the note file, extension included.
    pub filename: String,
    /// Matching lines, trimmed, in file order. Never empty.
    pub todos: Vec<String>,
}

/// Extract open todos from one note.
///
/// A line matches if it contains `todo_marker` anywhere; matched lines are
/// kept verbatim apart from trimming surrounding whitespace. Returns `None`
/// when nothing matches, and also when the file cannot be read or decoded
/// as UTF-8 — read failures are logged and must not abort the run.
pub fn todos_from_note(note_path: &Path, todo_marker: &str) -> Option<NoteTodoRecord> {
    let contents = match fs::read_to_string(note_path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Error reading {}: {e}", note_path.display());
            return None;
        }
    };

    let todos: Vec<String> = contents
        .lines()
        .filter(|line| line.contains(todo_marker))
        .map(|line| line.trim().to_string())
        .collect();

    if todos.is_empty() {
        return None;
    }

    let folder = note_path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let filename = note_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Some(NoteTodoRecord {
        folder,
        filename,
        todos,
    })
}
