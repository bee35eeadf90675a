use crate::core::store::WorkLogStore;
use crate::core::validate::validate_entry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};

/// Fields collected from the command line for a new entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: EntryType,
    pub client: String,
    pub location: String,
    pub attachment: Option<String>,
}

pub struct AddLogic;

impl AddLogic {
    /// Validate and store a new entry; returns it with its assigned id.
    pub fn apply(pool: &DbPool, new: NewEntry) -> AppResult<LogEntry> {
        let mut store = WorkLogStore::open(pool)?;

        let mut entry = LogEntry::new(store.next_id(), new.date, new.start, new.end, new.kind);
        entry.client = new.client;
        entry.location = new.location;
        entry.attachment_name = new.attachment;

        validate_entry(&entry)?;
        store.add(entry.clone())?;

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &entry.id,
            &format!(
                "{} {} {}-{}",
                entry.date, entry.kind, entry.start_time, entry.end_time
            ),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(entry)
    }
}
