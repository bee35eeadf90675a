// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::model::{EntryExport, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const BOM: &str = "\u{FEFF}";

/// Write rows as CSV: byte-order mark first, every field quoted, CRLF rows.
pub(crate) fn write_csv<W: Write>(mut out: W, rows: &[EntryExport]) -> AppResult<()> {
    out.write_all(BOM.as_bytes())?;

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(row.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(file, rows)?;

    notify_export_success("CSV", path, rows.len());
    Ok(())
}
