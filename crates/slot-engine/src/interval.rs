//! Interval primitives: a closed time range and whole-minute arithmetic on instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A time range between two UTC instants.
///
/// Serialized with the field names `starts` / `ends`, matching the roster format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    #[serde(rename = "starts")]
    pub start: DateTime<Utc>,
    #[serde(rename = "ends")]
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if the start lies after the end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// True iff `start <= instant <= end`. Both endpoints are inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        duration_minutes(self.start, self.end)
    }

    /// True iff `start <= end`.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

/// Absolute difference between two instants in whole minutes.
///
/// Partial minutes are truncated, and the result does not depend on argument order.
pub fn duration_minutes(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b - a).num_minutes().abs()
}
