//! # openslot-engine
//!
//! Multi-calendar free/busy reconciliation. Given busy intervals already
//! fetched from one or more calendars, merges overlaps, walks a date range
//! day by day restricted to working hours and weekdays, and emits the
//! complementary free slots of at least a requested duration -- plus the
//! dual operations built on the same primitives: conflict checking for one
//! candidate range, meeting-time suggestion, and travel-buffer placement.
//!
//! Every function here is a pure, synchronous computation over its inputs:
//! no I/O, no clock access, no shared state. Fetching busy data (and any
//! fan-out across calendars) belongs to the caller.
//!
//! ## Modules
//!
//! - [`interval`] -- validated `[start, end)` value types
//! - [`merge`] -- normalize busy intervals into a minimal disjoint set
//! - [`scan`] -- day-by-day free-slot scanning within working hours
//! - [`conflict`] -- busy intervals colliding with one candidate range
//! - [`availability`] -- per-calendar feed reconciliation with diagnostics
//! - [`suggest`] -- fixed-step candidate meeting-time enumeration
//! - [`buffer`] -- travel-buffer placement ahead of an event
//! - [`error`] -- error types

pub mod availability;
pub mod buffer;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod merge;
pub mod scan;
pub mod suggest;

pub use availability::{collect_busy, reconcile, Availability, CalendarFeed, RawBusy, SourceError};
pub use buffer::{plan_travel_buffer, BufferPlacement};
pub use conflict::{find_conflicts, Conflict};
pub use error::{Result, SlotError};
pub use interval::{BusyInterval, TimeInterval};
pub use merge::merge;
pub use scan::{find_free_slots, DateRange, FreeSlot, WorkingWindow};
pub use suggest::{suggest_meeting_times, Suggestion};
