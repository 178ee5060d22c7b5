//! # slot-engine
//!
//! Find bookable slots across a roster of photographers.
//!
//! Each photographer declares availability windows and already holds bookings. The
//! engine removes bookings from windows to get free intervals, then anchors a slot of
//! the requested length at the first free interval that is long enough.
//!
//! ## Modules
//!
//! - [`interval`] — time ranges, containment, whole-minute differences
//! - [`roster`] — photographers, availability windows, bookings
//! - [`freeslots`] — free intervals per photographer (pairwise booking subtraction)
//! - [`matcher`] — pick a free interval and build the candidate slot
//! - [`resolver`] — run the pipeline across the roster
//! - [`request`] — validated duration and selection policy
//! - [`error`] — Error types

pub mod error;
pub mod freeslots;
pub mod interval;
pub mod matcher;
pub mod request;
pub mod resolver;
pub mod roster;

pub use error::SlotError;
pub use freeslots::{
    derive_free_intervals, derive_roster_free_intervals, FreeInterval, ResourceFreeIntervals,
};
pub use interval::{duration_minutes, Interval};
pub use matcher::{match_slot, CandidateSlot};
pub use request::{BookingRequest, DurationMinutes, SelectionPolicy};
pub use resolver::{available_slots_for_booking, resolve_available_slots, AvailableSlot};
pub use roster::{Booking, Resource, ResourceSchedule, Roster};
