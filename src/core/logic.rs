use crate::models::day_summary::DaySummary;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Worked minutes in `entries`: only `work` entries count; unreadable or
    /// inverted ranges contribute nothing.
    pub fn work_minutes(entries: &[LogEntry]) -> i64 {
        entries
            .iter()
            .filter(|e| e.kind.is_work())
            .filter_map(LogEntry::duration_minutes)
            .map(|m| m.max(0))
            .sum()
    }

    pub fn build_daily_summary(date: NaiveDate, entries: &[LogEntry]) -> DaySummary {
        let day: Vec<LogEntry> = entries.iter().filter(|e| e.is_on(date)).cloned().collect();

        DaySummary {
            date,
            entries: day.len(),
            work_minutes: Self::work_minutes(&day),
        }
    }

    /// One summary per date, in the order given.
    pub fn build_period_summary(dates: &[NaiveDate], entries: &[LogEntry]) -> Vec<DaySummary> {
        dates
            .iter()
            .map(|d| Self::build_daily_summary(*d, entries))
            .collect()
    }
}
