//! Enumerate candidate meeting times across a date range.
//!
//! The dual of free-slot scanning: instead of emitting gaps, steps concrete
//! candidate slots of the requested duration through each day's working
//! window and keeps the ones that clear the busy set. Candidates must fit
//! entirely inside the window.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::TimeInterval;
use crate::merge::merge;
use crate::scan::{day_window, is_weekend, DateRange, WorkingWindow};

/// A candidate meeting slot with no conflicting busy time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Step candidates of `duration_minutes` through each eligible day in
/// `step_minutes` increments, returning those free of conflicts.
///
/// A candidate qualifies when it lies wholly within the day's working
/// window, starts at or after `earliest` (pass the current instant to skip
/// slots already in the past), and overlaps no busy interval under
/// open-interval semantics -- a candidate starting exactly when a busy block
/// ends is free. All qualifying candidates are returned; capping the list is
/// the caller's policy.
///
/// # Errors
/// [`SlotError::InvalidDuration`] when `duration_minutes` or `step_minutes`
/// is zero or negative.
pub fn suggest_meeting_times(
    busy: &[TimeInterval],
    range: DateRange,
    window: WorkingWindow,
    tz: Tz,
    duration_minutes: i64,
    step_minutes: i64,
    earliest: Option<DateTime<Utc>>,
    skip_weekends: bool,
) -> Result<Vec<Suggestion>> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    if step_minutes <= 0 {
        return Err(SlotError::InvalidDuration(step_minutes));
    }

    let merged = merge(busy);
    let duration = Duration::minutes(duration_minutes);
    let step = Duration::minutes(step_minutes);
    let mut suggestions = Vec::new();

    for date in range.days() {
        if skip_weekends && is_weekend(date) {
            continue;
        }
        let Some((day_start, day_end)) = day_window(date, window, tz) else {
            continue;
        };

        let mut slot_start = day_start;
        while slot_start + duration <= day_end {
            let candidate = TimeInterval::new_unchecked(slot_start, slot_start + duration);
            let in_past = earliest.is_some_and(|e| slot_start < e);
            if !in_past && !merged.iter().any(|b| b.overlaps(&candidate)) {
                suggestions.push(Suggestion {
                    date,
                    start: candidate.start(),
                    end: candidate.end(),
                });
            }
            slot_start += step;
        }
    }

    Ok(suggestions)
}
