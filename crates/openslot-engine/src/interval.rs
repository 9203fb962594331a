//! Validated time intervals on the UTC timeline.
//!
//! A [`TimeInterval`] is half-open, `[start, end)`, and always satisfies
//! `start < end` -- the constructor rejects degenerate and inverted input, and
//! serde deserialization goes through the same check. Display conversions to
//! local time happen at the output boundary, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A half-open time range `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr", into = "IntervalRepr")]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeInterval {
    /// Create an interval, rejecting `start >= end`.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] for zero-length or inverted input.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Construct without validation. Callers must guarantee `start < end`.
    pub(crate) fn new_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whole minutes between start and end, rounded down.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Exact length in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Open-interval overlap: shared time of positive length.
    ///
    /// Touching intervals (`self.end == other.start`) do NOT overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Serde representation; conversion re-runs the constructor check so a
/// deserialized interval can never violate the invariant.
#[derive(Serialize, Deserialize)]
struct IntervalRepr {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalRepr> for TimeInterval {
    type Error = SlotError;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        TimeInterval::new(repr.start, repr.end)
    }
}

impl From<TimeInterval> for IntervalRepr {
    fn from(interval: TimeInterval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
        }
    }
}

/// A busy interval tagged with the calendar (or attendee) it came from.
///
/// The tag is diagnostic only: merging and overlap checks never look at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub source: String,
    pub interval: TimeInterval,
}

impl BusyInterval {
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] for zero-length or inverted input.
    pub fn new(
        source: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            source: source.into(),
            interval: TimeInterval::new(start, end)?,
        })
    }
}
