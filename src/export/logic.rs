// src/export/logic.rs

use crate::core::store::WorkLogStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export stored entries.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period expression (see `parse_range`)
    ///
    /// Returns the number of exported entries.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let store = WorkLogStore::open(pool)?;

        let entries: Vec<LogEntry> = match range {
            None => store.all().to_vec(),
            Some(r) if r.eq_ignore_ascii_case("all") => store.all().to_vec(),
            Some(r) => {
                let (from, to) = parse_range(r)?;
                store.list_range(from, to)
            }
        };

        if entries.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                export_csv(&rows, &path)?
            }
            ExportFormat::Json => export_json(&entries, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} entries to {}", entries.len(), path.display()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(entries.len())
    }
}
