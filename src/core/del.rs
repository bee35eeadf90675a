use crate::core::store::WorkLogStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one entry by id; returns the removed record.
    pub fn apply(pool: &DbPool, id: &str) -> AppResult<LogEntry> {
        let mut store = WorkLogStore::open(pool)?;

        let removed = store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        store.delete(id)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            id,
            &format!("{} {}", removed.date, removed.kind),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(removed)
    }
}
