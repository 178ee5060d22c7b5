//! Derive free intervals for a resource by removing bookings from availability windows.
//!
//! Each booking is subtracted from each availability window on its own, against the
//! original window. The results are accumulated, not chained: a window holding two
//! bookings yields each booking's individual complement, so the output can overlap or
//! count the same free time twice. This is a known limitation of the derivation and is
//! kept because callers observe it through slot selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::interval::{duration_minutes, Interval};
use crate::roster::{Booking, ResourceSchedule, Roster};

/// A free span of time inside an availability window.
///
/// Not guaranteed to satisfy `start <= end`: a booking that straddles a window edge
/// produces an inverted span whose `duration_minutes` is still the absolute length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeInterval {
    #[serde(rename = "starts")]
    pub start: DateTime<Utc>,
    #[serde(rename = "ends")]
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_minutes: duration_minutes(start, end),
        }
    }
}

/// The free intervals of one resource, in derivation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceFreeIntervals {
    pub resource_id: String,
    pub intervals: Vec<FreeInterval>,
}

/// Free intervals left in `availability` once `booking` is removed.
///
/// - Booking endpoints both outside the window: the whole window.
/// - Otherwise: `(availability.start, booking.start)` always, even at zero length, then
///   `(booking.end, availability.end)` unless that gap is under one minute.
pub fn subtract_booking(availability: &Interval, booking: &Interval) -> Vec<FreeInterval> {
    let starts_within = availability.contains(booking.start);
    let ends_within = availability.contains(booking.end);

    if !starts_within && !ends_within {
        return vec![FreeInterval::new(availability.start, availability.end)];
    }

    let mut free = vec![FreeInterval::new(availability.start, booking.start)];
    if duration_minutes(booking.end, availability.end) != 0 {
        free.push(FreeInterval::new(booking.end, availability.end));
    }
    free
}

/// Free intervals for one availability window against every booking of its resource.
///
/// A window without bookings is free in its entirety.
pub fn free_intervals_in_window(
    availability: &Interval,
    bookings: &[Booking],
) -> Vec<FreeInterval> {
    if bookings.is_empty() {
        return vec![FreeInterval::new(availability.start, availability.end)];
    }

    bookings
        .iter()
        .flat_map(|booking| subtract_booking(availability, &booking.interval))
        .collect()
}

/// Derive the free intervals of a single resource.
///
/// Windows are visited in declaration order, and within a window bookings are visited
/// in declaration order. The slot matcher relies on this order.
pub fn derive_free_intervals(schedule: &ResourceSchedule) -> ResourceFreeIntervals {
    let intervals: Vec<FreeInterval> = schedule
        .availabilities
        .iter()
        .flat_map(|availability| free_intervals_in_window(availability, &schedule.bookings))
        .collect();

    for interval in &intervals {
        trace!(
            resource_id = %schedule.id(),
            start = %interval.start,
            end = %interval.end,
            minutes = interval.duration_minutes,
            "free interval"
        );
    }
    debug!(
        resource_id = %schedule.id(),
        windows = schedule.availabilities.len(),
        bookings = schedule.bookings.len(),
        free = intervals.len(),
        "derived free intervals"
    );

    ResourceFreeIntervals {
        resource_id: schedule.id().to_string(),
        intervals,
    }
}

/// Derive free intervals for every resource, in roster order.
pub fn derive_roster_free_intervals(roster: &Roster) -> Vec<ResourceFreeIntervals> {
    roster.iter().map(derive_free_intervals).collect()
}
