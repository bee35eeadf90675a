use chrono::NaiveDate;
use serde::Serialize;

/// Per-day totals shown by the month view.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: usize,
    pub work_minutes: i64,
}

impl DaySummary {
    pub fn work_hours(&self) -> f64 {
        self.work_minutes as f64 / 60.0
    }
}
