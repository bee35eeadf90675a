pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Parse an entry type given on the command line.
pub(crate) fn parse_kind(raw: &str) -> AppResult<EntryType> {
    EntryType::parse_known(raw).ok_or_else(|| {
        let known: Vec<&str> = EntryType::KNOWN.iter().map(EntryType::as_tag).collect();
        AppError::InvalidEntryType(format!("{raw} (expected one of: {})", known.join(", ")))
    })
}

/// Date as stored: `YYYY-MM-DD`, zero-padded.
pub(crate) fn normalize_date(raw: &str) -> AppResult<String> {
    date::parse_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

/// Time as stored: `HH:MM`, zero-padded.
pub(crate) fn normalize_time(raw: &str) -> AppResult<String> {
    Ok(parse_required_time(raw)?.format("%H:%M").to_string())
}
