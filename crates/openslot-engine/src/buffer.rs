//! Travel-buffer placement ahead of a calendar event.
//!
//! Proposes a buffer window ending exactly when the event starts and gates
//! it on the conflict check. A blocked placement carries the complete
//! conflict list so the caller can report which events are in the way.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::conflict::{find_conflicts, Conflict};
use crate::error::{Result, SlotError};
use crate::interval::{BusyInterval, TimeInterval};

/// Outcome of attempting to place a travel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferPlacement {
    /// The buffer window is unobstructed.
    Clear(TimeInterval),
    /// One or more busy intervals intersect the proposed window.
    Blocked(Vec<Conflict>),
}

/// Propose `[event_start - minutes, event_start)` and check it for
/// conflicts.
///
/// The event being buffered must not appear in `busy` -- the buffer always
/// touches the event, and touching is not a conflict, but callers fetch the
/// surrounding schedule and are expected to exclude the target event itself.
/// All-day events have no timed start and must be rejected before calling.
///
/// # Errors
/// [`SlotError::InvalidDuration`] when `minutes <= 0`.
pub fn plan_travel_buffer(
    busy: &[BusyInterval],
    event_start: DateTime<Utc>,
    minutes: i64,
) -> Result<BufferPlacement> {
    if minutes <= 0 {
        return Err(SlotError::InvalidDuration(minutes));
    }

    let window =
        TimeInterval::new_unchecked(event_start - Duration::minutes(minutes), event_start);
    let conflicts = find_conflicts(busy, &window);

    if conflicts.is_empty() {
        Ok(BufferPlacement::Clear(window))
    } else {
        Ok(BufferPlacement::Blocked(conflicts))
    }
}
