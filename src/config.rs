//! Configuration for the todo extraction run.
//!
//! Loads overrides from a YAML file in standard locations, falling back
//! to built-in defaults. The loaded value is passed explicitly into each
//! component; there is no global settings state.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// File extension identifying note files.
    pub note_extension: String,
    /// Literal substring marking an open task-list line.
    pub todo_marker: String,
    /// Reserved name of the consolidated output file.
    pub output_filename: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            note_extension: ".md".into(),
            todo_marker: "* [ ]".into(),
            output_filename: "open_todos.md".into(),
        }
    }
}

impl NotesConfig {
    /// Load configuration from a YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./get-todos.yaml
    /// 2. ~/.config/get-todos/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("get-todos.yaml")),
                dirs::home_dir().map(|h| h.join(".config/get-todos/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}: {e}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_note_conventions() {
        let config = NotesConfig::default();
        assert_eq!(config.note_extension, ".md");
        assert_eq!(config.todo_marker, "* [ ]");
        assert_eq!(config.output_filename, "open_todos.md");
    }

    #[test]
    fn loads_partial_yaml_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("get-todos.yaml");
        std::fs::write(&path, "note_extension: .markdown\n").unwrap();

        let config = NotesConfig::load(Some(&path));
        assert_eq!(config.note_extension, ".markdown");
        assert_eq!(config.todo_marker, "* [ ]");
        assert_eq!(config.output_filename, "open_todos.md");
    }

    #[test]
    fn malformed_yaml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("get-todos.yaml");
        std::fs::write(&path, ": not yaml [").unwrap();

        let config = NotesConfig::load(Some(&path));
        assert_eq!(config.output_filename, "open_todos.md");
    }
}
