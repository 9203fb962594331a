//! Multi-calendar feed reconciliation.
//!
//! Accepts per-calendar fetch outcomes (already retrieved by the caller --
//! this module performs no I/O), converts raw busy entries into validated
//! intervals, expands all-day entries to the full civil days they span, and
//! computes unified busy/free availability. A calendar whose fetch failed is
//! skipped and recorded as a diagnostic; availability is still computed from
//! whatever calendars succeeded, so "no data could be retrieved" is never
//! conflated with "no free time exists".

use chrono::{DateTime, Days, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::interval::{BusyInterval, TimeInterval};
use crate::merge::merge;
use crate::scan::{find_free_slots, zoned, DateRange, FreeSlot, WorkingWindow};

/// One busy entry as reported by a free/busy source, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBusy {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// All-day entries occupy every civil day they span, regardless of the
    /// clock times carried in `start`/`end`.
    #[serde(default)]
    pub all_day: bool,
}

/// The fetch outcome for one calendar: either its busy entries or the error
/// that prevented retrieving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFeed {
    pub calendar_id: String,
    #[serde(default)]
    pub busy: Vec<RawBusy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A calendar that contributed nothing because its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceError {
    pub calendar_id: String,
    pub message: String,
}

/// Unified availability across every calendar that could be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Merged busy intervals (sorted, disjoint, maximal).
    pub busy: Vec<TimeInterval>,
    /// Free slots in chronological order across the scanned range.
    pub free: Vec<FreeSlot>,
    /// Calendars skipped because their fetch failed.
    pub skipped: Vec<SourceError>,
}

/// Convert feeds into tagged busy intervals plus skipped-source diagnostics.
///
/// A feed carrying an error is skipped whole. Timed entries with
/// `start >= end` are dropped: a zero-length busy period cannot occlude any
/// free time. All-day entries become one full-day interval per civil day
/// they span in `tz`.
pub fn collect_busy(feeds: &[CalendarFeed], tz: Tz) -> (Vec<BusyInterval>, Vec<SourceError>) {
    let mut busy = Vec::new();
    let mut skipped = Vec::new();

    for feed in feeds {
        if let Some(message) = &feed.error {
            warn!(
                calendar_id = %feed.calendar_id,
                error = %message,
                "skipping calendar with failed fetch"
            );
            skipped.push(SourceError {
                calendar_id: feed.calendar_id.clone(),
                message: message.clone(),
            });
            continue;
        }

        for raw in &feed.busy {
            if raw.all_day {
                expand_all_day(&mut busy, &feed.calendar_id, raw, tz);
            } else {
                match TimeInterval::new(raw.start, raw.end) {
                    Ok(interval) => busy.push(BusyInterval {
                        source: feed.calendar_id.clone(),
                        interval,
                    }),
                    Err(_) => {
                        debug!(
                            calendar_id = %feed.calendar_id,
                            start = %raw.start,
                            end = %raw.end,
                            "dropping degenerate busy entry"
                        );
                    }
                }
            }
        }
    }

    (busy, skipped)
}

/// Compute unified availability from per-calendar fetch outcomes.
///
/// When every feed failed, the result carries zero free slots together with
/// the complete `skipped` list -- the caller can distinguish that from a
/// genuinely empty calendar.
///
/// # Errors
/// [`crate::SlotError::InvalidDuration`] when `min_duration_minutes <= 0`.
pub fn reconcile(
    feeds: &[CalendarFeed],
    range: DateRange,
    window: WorkingWindow,
    tz: Tz,
    min_duration_minutes: i64,
    skip_weekends: bool,
) -> Result<Availability> {
    let (tagged, skipped) = collect_busy(feeds, tz);

    // Every fetch failed: report no free slots alongside the diagnostics.
    // An empty merge of zero feeds would claim the whole range is free.
    if !feeds.is_empty() && skipped.len() == feeds.len() {
        return Ok(Availability {
            busy: Vec::new(),
            free: Vec::new(),
            skipped,
        });
    }

    let intervals: Vec<TimeInterval> = tagged.iter().map(|b| b.interval).collect();

    let free = find_free_slots(
        &intervals,
        range,
        window,
        tz,
        min_duration_minutes,
        skip_weekends,
    )?;

    Ok(Availability {
        busy: merge(&intervals),
        free,
        skipped,
    })
}

/// Expand an all-day entry into one midnight-to-midnight interval per civil
/// day it spans. The scanner's per-day clipping then reduces each to the
/// working window, occupying it entirely.
fn expand_all_day(busy: &mut Vec<BusyInterval>, source: &str, raw: &RawBusy, tz: Tz) {
    let first = raw.start.with_timezone(&tz).date_naive();
    // The end bound is exclusive; back up one second so an entry ending at
    // midnight does not bleed into the following day.
    let last = (raw.end - Duration::seconds(1))
        .with_timezone(&tz)
        .date_naive()
        .max(first);

    for date in first.iter_days().take_while(|d| *d <= last) {
        let day_start = zoned(date, 0, tz);
        let day_end = zoned(date + Days::new(1), 0, tz);
        if day_start < day_end {
            busy.push(BusyInterval {
                source: source.to_string(),
                interval: TimeInterval::new_unchecked(day_start, day_end),
            });
        }
    }
}
