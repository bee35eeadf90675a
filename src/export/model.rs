// src/export/model.rs

use crate::core::timeline::categories;
use crate::models::log_entry::LogEntry;

/// Flat spreadsheet row for one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub date: String,
    pub type_label: String,
    pub location: String,
    pub client: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            date: e.date.clone(),
            type_label: categories::label(&e.kind),
            location: e.location.clone(),
            client: e.client.clone(),
            start_time: e.start_time.clone(),
            end_time: e.end_time.clone(),
        }
    }
}

/// CSV header, in row order.
pub(crate) fn get_headers() -> [&'static str; 6] {
    [
        "תאריך",
        "סוג דיווח",
        "מיקום עבודה",
        "לקוח לחיוב",
        "שעת התחלה",
        "שעת סיום",
    ]
}

impl EntryExport {
    pub(crate) fn to_row(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.type_label.as_str(),
            self.location.as_str(),
            self.client.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
        ]
    }
}
