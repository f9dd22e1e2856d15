//! Persistence of the consolidated todo file.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::NotesConfig;
use crate::extractor::NoteTodoRecord;
use crate::formatter;
use crate::report;

/// Write the consolidated todo file under `notes_path`, or report when
/// nothing was found.
///
/// An empty record set is not an error: nothing is written and any output
/// file from a previous run is left untouched. A failed write is fatal.
pub fn save_todos(
    notes_path: &Path,
    config: &NotesConfig,
    records: &[NoteTodoRecord],
) -> Result<(), String> {
    if records.is_empty() {
        report::info("No todos found in the specified path");
        return Ok(());
    }

    let output_path = notes_path.join(&config.output_filename);
    let contents = formatter::format_todos(records).concat();

    fs::write(&output_path, &contents)
        .map_err(|e| format!("Error saving todos to {}: {e}", output_path.display()))?;

    debug!("Wrote {} bytes to {}", contents.len(), output_path.display());
    report::success(&format!(
        "Saved {} todo sections to {}",
        records.len(),
        output_path.display()
    ));
    Ok(())
}
