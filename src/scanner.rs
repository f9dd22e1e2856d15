//! Note-file discovery.
//!
//! Walks the notes tree recursively and collects Markdown files, skipping
//! the consolidated output file so repeated runs never re-read their own
//! artifact. Symlinks are not followed.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::NotesConfig;

#[derive(Debug)]
pub struct NoteScanner {
    root: PathBuf,
    note_extension: String,
    output_filename: String,
}

impl NoteScanner {
    /// Create a scanner rooted at `root`.
    ///
    /// Fails if the path does not exist or is not a directory; this check
    /// runs before any scanning so a bad path never produces partial work.
    pub fn new(root: &Path, config: &NotesConfig) -> Result<Self, String> {
        if !root.exists() {
            return Err(format!("Path does not exist: {}", root.display()));
        }
        if !root.is_dir() {
            return Err(format!("Path is not a directory: {}", root.display()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            note_extension: config.note_extension.clone(),
            output_filename: config.output_filename.clone(),
        })
    }

    /// Collect candidate note paths at any depth, sorted by path so runs
    /// are deterministic regardless of directory iteration order.
    pub fn walk_notes(&self) -> Vec<PathBuf> {
        let mut notes: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && self.is_note(&entry.file_name().to_string_lossy())
            })
            .map(walkdir::DirEntry::into_path)
            .collect();
        notes.sort();
        debug!("Found {} note files under {}", notes.len(), self.root.display());
        notes
    }

    fn is_note(&self, name: &str) -> bool {
        name.ends_with(&self.note_extension) && name != self.output_filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scanner(root: &Path) -> NoteScanner {
        NoteScanner::new(root, &NotesConfig::default()).unwrap()
    }

    #[test]
    fn missing_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = NoteScanner::new(&missing, &NotesConfig::default()).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn file_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "* [ ] x").unwrap();
        let err = NoteScanner::new(&file, &NotesConfig::default()).unwrap_err();
        assert!(err.contains("not a directory"));
    }

    #[test]
    fn skips_non_markdown_and_output_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "x").unwrap();
        fs::write(dir.path().join("b.md"), "x").unwrap();
        fs::write(dir.path().join("open_todos.md"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let notes = scanner(dir.path()).walk_notes();
        let names: Vec<String> = notes
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn recurses_into_nested_folders() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("note.md"), "x").unwrap();
        fs::write(deep.join("open_todos.md"), "x").unwrap();

        let notes = scanner(dir.path()).walk_notes();
        assert_eq!(notes, vec![deep.join("note.md")]);
    }

    #[test]
    fn paths_come_back_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("work")).unwrap();
        fs::create_dir(dir.path().join("life")).unwrap();
        fs::write(dir.path().join("work/z.md"), "x").unwrap();
        fs::write(dir.path().join("life/a.md"), "x").unwrap();
        fs::write(dir.path().join("work/a.md"), "x").unwrap();

        let notes = scanner(dir.path()).walk_notes();
        let mut sorted = notes.clone();
        sorted.sort();
        assert_eq!(notes, sorted);
    }
}
