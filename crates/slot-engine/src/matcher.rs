//! Match a requested duration against a resource's free intervals.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::freeslots::{FreeInterval, ResourceFreeIntervals};
use crate::interval::Interval;
use crate::request::{DurationMinutes, SelectionPolicy};

/// A concrete proposed booking for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub resource_id: String,
    pub interval: Interval,
}

/// Pick the free interval a slot of `duration` should be anchored on.
///
/// An interval qualifies when its `duration_minutes >= duration`. Under
/// [`SelectionPolicy::EmissionOrder`] the first qualifying interval wins; under
/// [`SelectionPolicy::EarliestStart`] the qualifying interval with the smallest start
/// wins, and equal starts keep the earlier one.
pub fn select_free_interval(
    intervals: &[FreeInterval],
    duration: DurationMinutes,
    policy: SelectionPolicy,
) -> Option<&FreeInterval> {
    let mut qualifying = intervals
        .iter()
        .filter(|free| free.duration_minutes >= duration.as_i64());

    match policy {
        SelectionPolicy::EmissionOrder => qualifying.next(),
        // `min_by_key` keeps the first of equal minima.
        SelectionPolicy::EarliestStart => qualifying.min_by_key(|free| free.start),
    }
}

/// Build the candidate slot for one resource, if any free interval is long enough.
///
/// The slot starts at the selected interval's start and ends exactly `duration` later.
/// The end is not clamped to the free interval's end.
pub fn match_slot(
    free: &ResourceFreeIntervals,
    duration: DurationMinutes,
    policy: SelectionPolicy,
) -> Option<CandidateSlot> {
    let Some(selected) = select_free_interval(&free.intervals, duration, policy) else {
        debug!(resource_id = %free.resource_id, %duration, "no free interval long enough");
        return None;
    };

    let start = selected.start;
    let Some(end) = start.checked_add_signed(duration.as_duration()) else {
        warn!(resource_id = %free.resource_id, %start, %duration, "slot end out of range");
        return None;
    };
    debug!(resource_id = %free.resource_id, %start, %end, "matched slot");

    Some(CandidateSlot {
        resource_id: free.resource_id.clone(),
        interval: Interval { start, end },
    })
}
