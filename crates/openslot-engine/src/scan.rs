//! Day-by-day free-slot scanning within working hours.
//!
//! Walks every civil date in a range, optionally skipping weekends, windows
//! each day to the working hours in the query timezone, and emits the gaps
//! between merged busy intervals that meet a minimum duration.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, SlotError};
use crate::interval::TimeInterval;
use crate::merge::{clip, merge};

/// Daily working hours in local civil time, e.g. 9-17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowRepr", into = "WindowRepr")]
pub struct WorkingWindow {
    start_hour: u32,
    end_hour: u32,
}

impl WorkingWindow {
    /// The conventional 9:00-17:00 work day.
    pub const DEFAULT: WorkingWindow = WorkingWindow {
        start_hour: 9,
        end_hour: 17,
    };

    /// Create a window, rejecting out-of-range hours and `start >= end`.
    ///
    /// An inverted window could never contain a free slot, so it fails fast
    /// here rather than producing silently empty scans.
    ///
    /// # Errors
    /// [`SlotError::InvalidHour`] for an hour above 23,
    /// [`SlotError::InvalidWindow`] when `start_hour >= end_hour`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        for hour in [start_hour, end_hour] {
            if hour > 23 {
                return Err(SlotError::InvalidHour(hour));
            }
        }
        if start_hour >= end_hour {
            return Err(SlotError::InvalidWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for WorkingWindow {
    type Err = SlotError;

    /// Parse the "9-17" form used by tool parameters.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| SlotError::InvalidWindowSpec(s.to_string()))?;
        let start_hour: u32 = start
            .trim()
            .parse()
            .map_err(|_| SlotError::InvalidWindowSpec(s.to_string()))?;
        let end_hour: u32 = end
            .trim()
            .parse()
            .map_err(|_| SlotError::InvalidWindowSpec(s.to_string()))?;
        Self::new(start_hour, end_hour)
    }
}

#[derive(Serialize, Deserialize)]
struct WindowRepr {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<WindowRepr> for WorkingWindow {
    type Error = SlotError;

    fn try_from(repr: WindowRepr) -> Result<Self> {
        WorkingWindow::new(repr.start_hour, repr.end_hour)
    }
}

impl From<WorkingWindow> for WindowRepr {
    fn from(window: WorkingWindow) -> Self {
        Self {
            start_hour: window.start_hour,
            end_hour: window.end_hour,
        }
    }
}

/// An inclusive range of civil dates.
///
/// Inverted ranges are legal and simply contain no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl DateRange {
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            first_day,
            last_day,
        }
    }

    /// Iterate the contained dates in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day;
        self.first_day.iter_days().take_while(move |d| *d <= last)
    }
}

/// A free gap within a single day's working window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Find free slots across a date range, restricted to working hours.
///
/// Busy intervals are merged globally, then each eligible day is windowed to
/// `[start_hour, end_hour)` in `tz` and the gaps between the day's clipped
/// busy intervals are emitted. A gap qualifies only when its exact length
/// reaches `min_duration_minutes`; a gap short by even a second is dropped.
/// Slots come out in chronological order across the whole range, and any
/// global cap on the count is the caller's policy.
///
/// # Errors
/// [`SlotError::InvalidDuration`] when `min_duration_minutes <= 0`.
pub fn find_free_slots(
    busy: &[TimeInterval],
    range: DateRange,
    window: WorkingWindow,
    tz: Tz,
    min_duration_minutes: i64,
    skip_weekends: bool,
) -> Result<Vec<FreeSlot>> {
    if min_duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(min_duration_minutes));
    }

    let merged = merge(busy);
    let mut slots = Vec::new();

    for date in range.days() {
        if skip_weekends && is_weekend(date) {
            continue;
        }
        let Some((day_start, day_end)) = day_window(date, window, tz) else {
            continue;
        };

        let day_busy = clip(&merged, day_start, day_end);

        let mut cursor = day_start;
        for iv in &day_busy {
            if cursor < iv.start() {
                push_gap(&mut slots, date, cursor, iv.start(), min_duration_minutes);
            }
            cursor = cursor.max(iv.end());
        }
        if cursor < day_end {
            push_gap(&mut slots, date, cursor, day_end, min_duration_minutes);
        }
    }

    Ok(slots)
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The `[day_start, day_end)` instants for a date's working window.
///
/// Returns `None` if DST adjustment collapses the window.
pub(crate) fn day_window(
    date: NaiveDate,
    window: WorkingWindow,
    tz: Tz,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = zoned(date, window.start_hour, tz);
    let end = zoned(date, window.end_hour, tz);
    (start < end).then_some((start, end))
}

/// Resolve a civil `(date, hour)` in `tz` to a UTC instant.
///
/// An ambiguous wall time (DST fall-back) takes the earlier offset. A wall
/// time inside a spring-forward gap resolves to the first valid instant
/// after it.
pub(crate) fn zoned(date: NaiveDate, hour: u32, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour));
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt.with_timezone(&Utc);
    }
    for step in 1..=8 {
        let probe = naive + Duration::minutes(30 * step);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt.with_timezone(&Utc);
        }
    }
    // No zone has a gap past 4 hours; fall back to a UTC reading.
    Utc.from_utc_datetime(&naive)
}

fn push_gap(
    slots: &mut Vec<FreeSlot>,
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    min_duration_minutes: i64,
) {
    let seconds = (end - start).num_seconds();
    if seconds >= min_duration_minutes * 60 {
        slots.push(FreeSlot {
            date,
            start,
            end,
            duration_minutes: seconds / 60,
        });
    }
}
