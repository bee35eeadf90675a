//! Geometry of day-timeline blocks.
//!
//! All coordinates are fractions of the full day (vertical) or of the full
//! available width (horizontal), in `[0, 1]`.

use super::categories;
use super::lanes::{LaneAssignment, max_lane};
use crate::models::log_entry::LogEntry;
use crate::utils::time::minute_of_day;
use serde::Serialize;

/// Smallest block height, so that every entry stays visible.
pub const MIN_HEIGHT: f64 = 0.05;
/// Blocks at or below this height use the single-line label.
pub const COMPACT_THRESHOLD: f64 = 0.08;
/// Share of a lane's slot filled by its block; the rest is gutter.
pub const LANE_FILL: f64 = 0.9;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedBlock<'a> {
    pub entry: &'a LogEntry,
    pub lane: usize,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub compact: bool,
    pub color: String,
    pub label: String,
    /// False when start or end could not be parsed and the block was degraded.
    pub time_valid: bool,
}

impl PositionedBlock<'_> {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Single-line text: label and time range.
    pub fn compact_text(&self) -> String {
        format!(
            "{} {} - {}",
            self.label, self.entry.start_time, self.entry.end_time
        )
    }

    /// Full text lines: label, time range, client and location.
    pub fn full_lines(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            format!("{} - {}", self.entry.start_time, self.entry.end_time),
            format!("{} ({})", self.entry.client, self.entry.location),
        ]
    }
}

/// Vertical placement as (top, height, time_valid).
///
/// An unparsable start puts the block at midnight; an unparsable end makes it
/// zero-length. Either way the height is floored to [`MIN_HEIGHT`].
fn vertical(entry: &LogEntry) -> (f64, f64, bool) {
    let (start, end) = (entry.start(), entry.end());

    let top = start.map(|s| minute_of_day(s) as f64 / MINUTES_PER_DAY);
    let duration = match (start, end) {
        (Some(s), Some(e)) => (minute_of_day(e) - minute_of_day(s)).max(0),
        _ => 0,
    };

    let raw_height = duration as f64 / 60.0 / 24.0;
    let height = raw_height.max(MIN_HEIGHT);

    (top.unwrap_or(0.0), height, start.is_some() && end.is_some())
}

/// Turn lane assignments into positioned blocks, in assignment order.
///
/// The lane width is shared by the whole day: `LANE_FILL / (max_lane + 1)`.
/// Assignments pointing outside `entries` are ignored.
pub fn layout<'a>(
    entries: &'a [LogEntry],
    assignments: &[LaneAssignment],
) -> Vec<PositionedBlock<'a>> {
    let Some(max_lane) = max_lane(assignments) else {
        return Vec::new();
    };

    let width = (1.0 / (max_lane + 1) as f64) * LANE_FILL;

    assignments
        .iter()
        .filter_map(|a| {
            let entry = entries.get(a.entry_index)?;
            let (top, height, time_valid) = vertical(entry);
            let style = categories::resolve(&entry.kind);

            Some(PositionedBlock {
                entry,
                lane: a.lane,
                top,
                height,
                left: a.lane as f64 * width,
                width,
                compact: height <= COMPACT_THRESHOLD,
                color: style.color,
                label: style.label,
                time_valid,
            })
        })
        .collect()
}
