use crate::core::store::{EntryPatch, WorkLogStore};
use crate::core::validate::validate_entry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;

pub struct EditLogic;

impl EditLogic {
    /// Merge `patch` into the stored entry, re-validate the result and save it.
    pub fn apply(pool: &DbPool, id: &str, patch: &EntryPatch) -> AppResult<LogEntry> {
        if patch.is_empty() {
            return Err(AppError::Validation("nothing to update".to_string()));
        }

        let mut store = WorkLogStore::open(pool)?;

        let mut merged = store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        patch.apply_to(&mut merged);
        validate_entry(&merged)?;

        store.update(id, patch)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "edit",
            id,
            &format!(
                "{} {} {}-{}",
                merged.date, merged.kind, merged.start_time, merged.end_time
            ),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(merged)
    }
}
