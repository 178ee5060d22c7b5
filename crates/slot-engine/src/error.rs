//! Error types for slot-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    #[error("Invalid duration: expected a non-negative whole number of minutes, got {0:?}")]
    InvalidDuration(String),

    #[error("Invalid selection policy: {0:?} (expected \"emission\" or \"earliest\")")]
    InvalidPolicy(String),

    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Duplicate resource id in roster: {0}")]
    DuplicateResource(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
