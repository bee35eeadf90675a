//! Work-log store.
//!
//! The whole log list lives as one JSON array under [`WORK_LOGS_KEY`]. The
//! store keeps an in-memory copy, every mutation rewrites the blob and hands
//! back the new state; readers only ever get slices or owned snapshots.
//! Stored records that cannot be decoded are carried along untouched and
//! written back after the decoded ones.

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate};
use serde_json::Value;

pub const WORK_LOGS_KEY: &str = "workLogs";
/// Where an unusable `workLogs` blob is copied before it gets replaced;
/// matches `kv::backup_key(WORK_LOGS_KEY)`.
pub const WORK_LOGS_BACKUP_KEY: &str = "workLogs.bak";

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub kind: Option<EntryType>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub attachment_name: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.kind.is_none()
            && self.client.is_none()
            && self.location.is_none()
            && self.attachment_name.is_none()
    }

    pub fn apply_to(&self, entry: &mut LogEntry) {
        if let Some(v) = &self.date {
            entry.date = v.clone();
        }
        if let Some(v) = &self.start_time {
            entry.start_time = v.clone();
        }
        if let Some(v) = &self.end_time {
            entry.end_time = v.clone();
        }
        if let Some(v) = &self.kind {
            entry.kind = v.clone();
        }
        if let Some(v) = &self.client {
            entry.client = v.clone();
        }
        if let Some(v) = &self.location {
            entry.location = v.clone();
        }
        if let Some(v) = &self.attachment_name {
            entry.attachment_name = Some(v.clone());
        }
    }
}

pub struct WorkLogStore<'p> {
    pool: &'p DbPool,
    logs: Vec<LogEntry>,
    unreadable: Vec<Value>,
}

impl<'p> WorkLogStore<'p> {
    /// Load the stored list. A missing, unreadable or non-array blob yields an
    /// empty store (unusable blobs are copied to [`WORK_LOGS_BACKUP_KEY`]);
    /// individual records that do not decode are kept aside, not dropped.
    pub fn open(pool: &'p DbPool) -> AppResult<Self> {
        let (logs, unreadable) = match kv::get_item::<Value>(&pool.conn, WORK_LOGS_KEY)? {
            None => (Vec::new(), Vec::new()),
            Some(Value::Array(items)) => decode_entries(items),
            Some(other) => {
                warning(format!(
                    "Invalid data in storage: work logs are not a list (copied to '{WORK_LOGS_BACKUP_KEY}')"
                ));
                kv::set_item(&pool.conn, WORK_LOGS_BACKUP_KEY, &other)?;
                (Vec::new(), Vec::new())
            }
        };

        Ok(Self {
            pool,
            logs,
            unreadable,
        })
    }

    pub fn all(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn get(&self, id: &str) -> Option<&LogEntry> {
        self.logs.iter().find(|l| l.id == id)
    }

    /// Snapshot of the entries recorded on `date`, in stored order.
    pub fn list(&self, date: NaiveDate) -> Vec<LogEntry> {
        self.logs.iter().filter(|l| l.is_on(date)).cloned().collect()
    }

    /// Snapshot of the entries between two dates, inclusive.
    pub fn list_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<LogEntry> {
        self.logs
            .iter()
            .filter(|l| l.day().is_some_and(|d| d >= from && d <= to))
            .cloned()
            .collect()
    }

    /// Distinct parsable dates, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.logs.iter().filter_map(LogEntry::day).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Millisecond timestamp id, bumped until it is unused.
    pub fn next_id(&self) -> String {
        let mut candidate = Local::now().timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    pub fn add(&mut self, entry: LogEntry) -> AppResult<&[LogEntry]> {
        if self.get(&entry.id).is_some() {
            return Err(AppError::Validation(format!(
                "an entry with id {} already exists",
                entry.id
            )));
        }
        self.logs.push(entry);
        self.persist()?;
        Ok(&self.logs)
    }

    pub fn update(&mut self, id: &str, patch: &EntryPatch) -> AppResult<&[LogEntry]> {
        let entry = self
            .logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        patch.apply_to(entry);
        self.persist()?;
        Ok(&self.logs)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<&[LogEntry]> {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);

        if self.logs.len() == before {
            return Err(AppError::EntryNotFound(id.to_string()));
        }

        self.persist()?;
        Ok(&self.logs)
    }

    fn persist(&self) -> AppResult<()> {
        let mut blob = self
            .logs
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        blob.extend(self.unreadable.iter().cloned());
        kv::set_item(&self.pool.conn, WORK_LOGS_KEY, &blob)
    }
}

/// Split stored records into decoded entries and raw leftovers.
fn decode_entries(items: Vec<Value>) -> (Vec<LogEntry>, Vec<Value>) {
    let mut logs = Vec::new();
    let mut unreadable = Vec::new();

    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<LogEntry>(item.clone()) {
            Ok(entry) => logs.push(entry),
            Err(e) => {
                warning(format!("Ignoring stored work log #{i}, kept as is: {e}"));
                unreadable.push(item);
            }
        }
    }

    (logs, unreadable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn crud_returns_new_state_and_persists() {
        let pool = DbPool::in_memory().unwrap();

        {
            let mut store = WorkLogStore::open(&pool).unwrap();
            assert!(store.all().is_empty());

            let state = store
                .add(LogEntry::new("1", d("2025-03-10"), t("08:00"), t("12:00"), EntryType::Work))
                .unwrap();
            assert_eq!(state.len(), 1);

            let state = store
                .add(LogEntry::new("2", d("2025-03-11"), t("09:00"), t("10:00"), EntryType::Study))
                .unwrap();
            assert_eq!(state.len(), 2);

            let patch = EntryPatch {
                client: Some("ACME".into()),
                end_time: Some("13:00".into()),
                ..Default::default()
            };
            let state = store.update("1", &patch).unwrap();
            assert_eq!(state[0].client, "ACME");
            assert_eq!(state[0].end_time, "13:00");

            let state = store.delete("2").unwrap();
            assert_eq!(state.len(), 1);
        }

        let reopened = WorkLogStore::open(&pool).unwrap();
        assert_eq!(reopened.all().len(), 1);
        assert_eq!(reopened.all()[0].client, "ACME");
        assert_eq!(reopened.list(d("2025-03-10")).len(), 1);
        assert!(reopened.list(d("2025-03-11")).is_empty());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = WorkLogStore::open(&pool).unwrap();
        assert!(matches!(
            store.delete("missing"),
            Err(AppError::EntryNotFound(_))
        ));
        assert!(matches!(
            store.update("missing", &EntryPatch::default()),
            Err(AppError::EntryNotFound(_))
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = WorkLogStore::open(&pool).unwrap();
        let e = LogEntry::new("1", d("2025-03-10"), t("08:00"), t("09:00"), EntryType::Work);
        store.add(e.clone()).unwrap();
        assert!(store.add(e).is_err());
        assert_ne!(store.next_id(), "1");
    }

    #[test]
    fn legacy_blob_with_bad_records_loads_the_rest() {
        let pool = DbPool::in_memory().unwrap();
        kv::set_raw(
            &pool.conn,
            WORK_LOGS_KEY,
            r#"[
                {"id":"1","date":"2025-03-10","start-time":"08:00","end-time":"09:00","type":"vacation","location":"","client":""},
                {"id":"2","date":"2025-03-10","type":"xyz"},
                42
            ]"#,
        )
        .unwrap();

        let store = WorkLogStore::open(&pool).unwrap();
        assert_eq!(store.all().len(), 2);
        assert_eq!(store.all()[0].kind, EntryType::Vacation);
        assert_eq!(store.all()[1].kind, EntryType::Other("xyz".into()));
        assert!(store.all()[1].start().is_none());
    }

    #[test]
    fn undecodable_records_survive_a_write() {
        let pool = DbPool::in_memory().unwrap();
        kv::set_raw(
            &pool.conn,
            WORK_LOGS_KEY,
            r#"[
                {"id":1700000000000,"date":"2025-03-10","start-time":"08:00","end-time":"09:00","type":"work","client":null,"location":""},
                {"id":["x"],"date":"2025-03-10"},
                42
            ]"#,
        )
        .unwrap();

        let mut store = WorkLogStore::open(&pool).unwrap();
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].id, "1700000000000");
        assert_eq!(store.all()[0].client, "");

        store
            .add(LogEntry::new("2", d("2025-03-11"), t("08:00"), t("09:00"), EntryType::Work))
            .unwrap();

        let blob: Value = kv::get_item(&pool.conn, WORK_LOGS_KEY).unwrap().unwrap();
        let items = blob.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["id"], "1700000000000");
        assert_eq!(items[1]["id"], "2");
        assert_eq!(items[2]["id"][0], "x");
        assert_eq!(items[3], 42);

        let reopened = WorkLogStore::open(&pool).unwrap();
        assert_eq!(reopened.all().len(), 2);
    }

    #[test]
    fn non_array_blob_is_empty_and_backed_up() {
        let pool = DbPool::in_memory().unwrap();
        kv::set_raw(&pool.conn, WORK_LOGS_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(WorkLogStore::open(&pool).unwrap().all().is_empty());

        let backup: Value = kv::get_item(&pool.conn, WORK_LOGS_BACKUP_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(backup["id"], "1");
        assert_eq!(kv::backup_key(WORK_LOGS_KEY), WORK_LOGS_BACKUP_KEY);
    }

    #[test]
    fn corrupt_blob_is_backed_up_before_overwrite() {
        let pool = DbPool::in_memory().unwrap();
        kv::set_raw(&pool.conn, WORK_LOGS_KEY, "[{\"id\":").unwrap();

        let mut store = WorkLogStore::open(&pool).unwrap();
        assert!(store.all().is_empty());
        store
            .add(LogEntry::new("1", d("2025-03-10"), t("08:00"), t("09:00"), EntryType::Work))
            .unwrap();

        assert_eq!(
            kv::get_raw(&pool.conn, WORK_LOGS_BACKUP_KEY).unwrap().as_deref(),
            Some("[{\"id\":")
        );
    }

    #[test]
    fn range_and_dates() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = WorkLogStore::open(&pool).unwrap();
        for (id, day) in [("1", "2025-03-12"), ("2", "2025-03-10"), ("3", "2025-03-12")] {
            store
                .add(LogEntry::new(id, d(day), t("08:00"), t("09:00"), EntryType::Work))
                .unwrap();
        }
        assert_eq!(store.dates(), vec![d("2025-03-10"), d("2025-03-12")]);
        assert_eq!(store.list_range(d("2025-03-11"), d("2025-03-31")).len(), 2);
    }
}
