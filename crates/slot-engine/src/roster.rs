//! Roster model: resources (photographers) with their availability windows and bookings.
//!
//! The roster is an in-memory snapshot handed to the resolver by the caller. Nothing in
//! this crate mutates it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// Public identity of a bookable resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

/// An existing reservation. The id is carried through but plays no part in slot finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(flatten)]
    pub interval: Interval,
}

/// A resource together with its declared availability windows and existing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSchedule {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(default)]
    pub availabilities: Vec<Interval>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl ResourceSchedule {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            availabilities: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.resource.id
    }
}

/// An ordered list of resource schedules. Order determines result order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(alias = "photographers")]
    pub resources: Vec<ResourceSchedule>,
}

impl Roster {
    pub fn new(resources: Vec<ResourceSchedule>) -> Self {
        Self { resources }
    }

    /// Parse a roster from JSON.
    ///
    /// Accepts either `{"resources": [...]}` or `{"photographers": [...]}` at the top
    /// level. Each entry carries `id`, `name`, `availabilities` and `bookings`, with
    /// intervals written as `{"starts": "...", "ends": "..."}` in RFC 3339.
    ///
    /// Parsing does not validate; call [`Roster::validate`] for that.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRoster` if the input is not a well-formed roster document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SlotError::InvalidRoster(e.to_string()))
    }

    /// Check structural invariants: every interval has `start <= end` and resource ids
    /// are unique.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` for the first inverted interval found, or
    /// `SlotError::DuplicateResource` for the first repeated id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for schedule in &self.resources {
            if !seen.insert(schedule.id()) {
                return Err(SlotError::DuplicateResource(schedule.id().to_string()));
            }

            let intervals = schedule
                .availabilities
                .iter()
                .chain(schedule.bookings.iter().map(|b| &b.interval));
            for interval in intervals {
                if !interval.is_well_formed() {
                    return Err(SlotError::InvalidInterval {
                        start: interval.start,
                        end: interval.end,
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a resource's public identity by id.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|s| s.resource.id == id)
            .map(|s| &s.resource)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceSchedule> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
