// src/export/json.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the stored records pretty-printed, in storage format.
pub(crate) fn export_json(entries: &[LogEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, entries.len());
    Ok(())
}
