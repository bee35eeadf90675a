//! Day-timeline layout: lane assignment for overlapping entries and block geometry.

pub mod categories;
pub mod lanes;
pub mod layout;

pub use categories::{CategoryStyle, resolve};
pub use lanes::{LaneAssignment, assign_lanes, max_lane};
pub use layout::{COMPACT_THRESHOLD, LANE_FILL, MIN_HEIGHT, PositionedBlock, layout};

use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DayTimeline<'a> {
    pub date: NaiveDate,
    pub lane_count: usize,
    pub blocks: Vec<PositionedBlock<'a>>,
}

impl<'a> DayTimeline<'a> {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks whose times could not be read.
    pub fn degraded(&self) -> impl Iterator<Item = &PositionedBlock<'a>> {
        self.blocks.iter().filter(|b| !b.time_valid)
    }
}

/// Lay out one day's entries. `entries` is expected to hold a single date.
pub fn build_day_timeline(date: NaiveDate, entries: &[LogEntry]) -> DayTimeline<'_> {
    let assignments = assign_lanes(entries);
    let lane_count = max_lane(&assignments).map_or(0, |m| m + 1);

    DayTimeline {
        date,
        lane_count,
        blocks: layout(entries, &assignments),
    }
}
