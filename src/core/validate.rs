//! Entry validation, applied before anything is written to the store.

use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;

/// Check that an entry is complete and consistent.
///
/// - date must be `YYYY-MM-DD`
/// - start and end must be `HH:MM`, with end strictly after start
/// - sick-type leave needs an attachment
/// - the type must be one of the known categories
pub fn validate_entry(entry: &LogEntry) -> AppResult<()> {
    if entry.day().is_none() {
        return Err(AppError::InvalidDate(entry.date.clone()));
    }

    if let EntryType::Other(tag) = &entry.kind {
        return Err(AppError::InvalidEntryType(tag.clone()));
    }

    let start = entry
        .start()
        .ok_or_else(|| AppError::InvalidTime(entry.start_time.clone()))?;
    let end = entry
        .end()
        .ok_or_else(|| AppError::InvalidTime(entry.end_time.clone()))?;

    if start >= end {
        return Err(AppError::Validation(format!(
            "end time ({}) must be after start time ({})",
            entry.end_time, entry.start_time
        )));
    }

    let has_attachment = entry
        .attachment_name
        .as_deref()
        .is_some_and(|a| !a.trim().is_empty());

    if entry.kind.requires_attachment() && !has_attachment {
        return Err(AppError::Validation(format!(
            "a supporting document is required for '{}' entries",
            entry.kind
        )));
    }

    Ok(())
}
