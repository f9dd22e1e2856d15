//! Consolidated output formatting.

use crate::extractor::NoteTodoRecord;

/// Serialize records into the line sequence written to the consolidated
/// todo file.
///
/// Folders are emitted in ascending lexicographic order so the output is
/// stable across runs regardless of traversal order. Within a folder,
/// records keep their arrival order (the scanner hands them over sorted by
/// path, so files within a folder end up sorted by filename).
///
/// Per folder: a `# <folder>` heading, then for each file a `## <filename>`
/// heading, its todo lines, and a blank line; one extra blank line closes
/// the folder block.
pub fn format_todos(records: &[NoteTodoRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut folders: Vec<&str> = records.iter().map(|r| r.folder.as_str()).collect();
    folders.sort_unstable();
    folders.dedup();

    let mut lines = Vec::new();
    for folder in folders {
        lines.push(format!("# {folder}\n"));
        for record in records.iter().filter(|r| r.folder == folder) {
            lines.push(format!("## {}\n", record.filename));
            lines.extend(record.todos.iter().map(|todo| format!("{todo}\n")));
            lines.push("\n".to_string());
        }
        lines.push("\n".to_string());
    }
    lines
}
