//! Resolve bookable slots across a whole roster.
//!
//! Runs the free-interval derivation and the slot matcher for every resource and keeps
//! the resources that can host the requested booking. The computation is a pure
//! function of the roster and the request; the roster is only read.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::freeslots::derive_free_intervals;
use crate::interval::Interval;
use crate::matcher::match_slot;
use crate::request::BookingRequest;
use crate::roster::{Resource, Roster};

/// A resource that can take the requested booking, with the proposed slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub resource: Resource,
    pub slot: Interval,
}

/// Find one slot per resource for the request, in roster order.
///
/// Resources without a long enough free interval are left out; an empty result is not
/// an error. A candidate whose resource id cannot be found in the roster again is
/// dropped.
pub fn resolve_available_slots(roster: &Roster, request: &BookingRequest) -> Vec<AvailableSlot> {
    let slots: Vec<AvailableSlot> = roster
        .iter()
        .map(derive_free_intervals)
        .filter_map(|free| match_slot(&free, request.duration, request.policy))
        .filter_map(|candidate| {
            let Some(resource) = roster.resource(&candidate.resource_id) else {
                debug!(
                    resource_id = %candidate.resource_id,
                    "matched resource missing from roster"
                );
                return None;
            };
            Some(AvailableSlot {
                resource: resource.clone(),
                slot: candidate.interval,
            })
        })
        .collect();

    debug!(
        resources = roster.len(),
        matched = slots.len(),
        duration = %request.duration,
        policy = %request.policy,
        "resolved available slots"
    );
    slots
}

/// Validate a raw duration and resolve slots with the default selection policy.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` if `raw_duration` is not a non-negative integer.
/// Nothing is computed in that case.
pub fn available_slots_for_booking(
    roster: &Roster,
    raw_duration: &str,
) -> Result<Vec<AvailableSlot>> {
    let request = BookingRequest::parse(raw_duration)?;
    Ok(resolve_available_slots(roster, &request))
}
