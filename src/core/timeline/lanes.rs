//! Lane assignment for entries of one day.

use crate::models::log_entry::LogEntry;
use chrono::NaiveTime;
use serde::Serialize;

/// Lane chosen for the entry at `entry_index` in the caller's slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    pub entry_index: usize,
    pub lane: usize,
}

/// Assign a lane to every entry so that no two overlapping entries share one.
///
/// Entries are stably sorted by start time (unparsable starts go last), then
/// each entry is pushed one lane past every earlier-starting entry it starts
/// before the end of. The result follows that sorted order.
///
/// The accumulation is transitive through earlier entries, so it can use more
/// lanes than an optimal interval colouring would.
// TODO: reuse the lowest free lane instead, once nothing depends on the
// current lane numbers.
pub fn assign_lanes(entries: &[LogEntry]) -> Vec<LaneAssignment> {
    // (index, start, end) with end falling back to start when unparsable
    let mut spans: Vec<(usize, Option<NaiveTime>, Option<NaiveTime>)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let start = e.start();
            (i, start, start.map(|s| e.end().unwrap_or(s)))
        })
        .collect();

    // None sorts before Some, so key on is_none() first
    spans.sort_by_key(|(_, start, _)| (start.is_none(), *start));

    let mut lanes = vec![0usize; spans.len()];

    for i in 0..spans.len() {
        let Some(start_i) = spans[i].1 else {
            continue;
        };
        for j in 0..i {
            if let Some(end_j) = spans[j].2
                && start_i < end_j
            {
                lanes[i] = lanes[i].max(lanes[j] + 1);
            }
        }
    }

    spans
        .iter()
        .zip(lanes)
        .map(|((entry_index, _, _), lane)| LaneAssignment {
            entry_index: *entry_index,
            lane,
        })
        .collect()
}

/// Highest lane in use, `None` for an empty day.
pub fn max_lane(assignments: &[LaneAssignment]) -> Option<usize> {
    assignments.iter().map(|a| a.lane).max()
}
