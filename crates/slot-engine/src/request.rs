//! Typed booking request: the validated duration and the slot selection policy.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A requested booking length in whole minutes, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }

    pub fn as_duration(self) -> Duration {
        Duration::minutes(self.as_i64())
    }
}

/// Ninety minutes, the default session length.
impl Default for DurationMinutes {
    fn default() -> Self {
        Self(90)
    }
}

impl FromStr for DurationMinutes {
    type Err = SlotError;

    /// Accepts an optionally padded run of ASCII digits. Signs, decimals, units and
    /// values above `u32::MAX` are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SlotError::InvalidDuration(s.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| SlotError::InvalidDuration(s.to_string()))
    }
}

impl TryFrom<i64> for DurationMinutes {
    type Error = SlotError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| SlotError::InvalidDuration(value.to_string()))
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which sufficient free interval to anchor a resource's candidate slot on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// First sufficient interval in derivation order (availability, then booking).
    #[default]
    EmissionOrder,
    /// Sufficient interval with the earliest start; ties keep derivation order.
    EarliestStart,
}

impl FromStr for SelectionPolicy {
    type Err = SlotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emission" | "emission_order" => Ok(Self::EmissionOrder),
            "earliest" | "earliest_start" => Ok(Self::EarliestStart),
            _ => Err(SlotError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmissionOrder => f.write_str("emission"),
            Self::EarliestStart => f.write_str("earliest"),
        }
    }
}

/// Everything the resolver needs besides the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub duration: DurationMinutes,
    #[serde(default)]
    pub policy: SelectionPolicy,
}

impl BookingRequest {
    pub fn new(duration: DurationMinutes) -> Self {
        Self {
            duration,
            policy: SelectionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse the raw duration text supplied by a caller (CLI flag, env var).
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` if `raw` is not a non-negative integer.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse().map(Self::new)
    }
}
