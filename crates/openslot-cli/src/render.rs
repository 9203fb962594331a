//! Response shaping: engine results to JSON-friendly report structs.
//!
//! Timestamps go out as RFC 3339 plus a local-time display string in the
//! query timezone ("09:00 AM"). Slot-count capping happens here, at the
//! output edge, never inside the engine.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use openslot_engine::buffer::BufferPlacement;
use openslot_engine::{Availability, Conflict, FreeSlot, Suggestion, TimeInterval};
use serde::Serialize;

fn display_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%I:%M %p").to_string()
}

fn display_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%A, %B %d, %Y").to_string()
}

#[derive(Serialize)]
pub struct RenderedSlot {
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub start_display: String,
    pub end_display: String,
}

impl RenderedSlot {
    fn new(slot: &FreeSlot, tz: Tz) -> Self {
        Self {
            date: slot.date.to_string(),
            start: slot.start.to_rfc3339(),
            end: slot.end.to_rfc3339(),
            duration_minutes: slot.duration_minutes,
            start_display: display_time(slot.start, tz),
            end_display: display_time(slot.end, tz),
        }
    }
}

#[derive(Serialize)]
pub struct RenderedConflict {
    pub calendar_id: String,
    pub start: String,
    pub end: String,
    pub overlap_minutes: i64,
    pub start_display: String,
    pub end_display: String,
}

impl RenderedConflict {
    fn new(conflict: &Conflict, tz: Tz) -> Self {
        Self {
            calendar_id: conflict.busy.source.clone(),
            start: conflict.busy.interval.start().to_rfc3339(),
            end: conflict.busy.interval.end().to_rfc3339(),
            overlap_minutes: conflict.overlap_minutes,
            start_display: display_time(conflict.busy.interval.start(), tz),
            end_display: display_time(conflict.busy.interval.end(), tz),
        }
    }
}

#[derive(Serialize)]
pub struct SkippedCalendar {
    pub calendar_id: String,
    pub error: String,
}

#[derive(Serialize)]
pub struct FreeReport {
    pub timezone: String,
    pub working_hours: String,
    pub min_duration_minutes: i64,
    pub slot_count: usize,
    pub free_slots: Vec<RenderedSlot>,
    pub skipped_calendars: Vec<SkippedCalendar>,
}

pub fn free_report(
    availability: &Availability,
    tz: Tz,
    working_hours: &str,
    min_duration_minutes: i64,
    limit: Option<usize>,
) -> FreeReport {
    let capped = limit.unwrap_or(usize::MAX);
    let free_slots: Vec<RenderedSlot> = availability
        .free
        .iter()
        .take(capped)
        .map(|slot| RenderedSlot::new(slot, tz))
        .collect();
    FreeReport {
        timezone: tz.to_string(),
        working_hours: working_hours.to_string(),
        min_duration_minutes,
        slot_count: free_slots.len(),
        free_slots,
        skipped_calendars: availability
            .skipped
            .iter()
            .map(|s| SkippedCalendar {
                calendar_id: s.calendar_id.clone(),
                error: s.message.clone(),
            })
            .collect(),
    }
}

#[derive(Serialize)]
pub struct CheckReport {
    pub has_conflicts: bool,
    pub conflict_count: usize,
    pub conflicts: Vec<RenderedConflict>,
    pub candidate: TimeRange,
    pub skipped_calendars: Vec<SkippedCalendar>,
}

#[derive(Serialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

pub fn check_report(
    conflicts: &[Conflict],
    candidate: &TimeInterval,
    skipped: &[openslot_engine::SourceError],
    tz: Tz,
) -> CheckReport {
    CheckReport {
        has_conflicts: !conflicts.is_empty(),
        conflict_count: conflicts.len(),
        conflicts: conflicts
            .iter()
            .map(|c| RenderedConflict::new(c, tz))
            .collect(),
        candidate: TimeRange {
            start: candidate.start().to_rfc3339(),
            end: candidate.end().to_rfc3339(),
        },
        skipped_calendars: skipped
            .iter()
            .map(|s| SkippedCalendar {
                calendar_id: s.calendar_id.clone(),
                error: s.message.clone(),
            })
            .collect(),
    }
}

#[derive(Serialize)]
pub struct RenderedSuggestion {
    pub start: String,
    pub end: String,
    pub date_display: String,
    pub time_display: String,
}

#[derive(Serialize)]
pub struct SuggestReport {
    pub suggestion_count: usize,
    pub suggestions: Vec<RenderedSuggestion>,
}

pub fn suggest_report(suggestions: &[Suggestion], tz: Tz, limit: usize) -> SuggestReport {
    let suggestions: Vec<RenderedSuggestion> = suggestions
        .iter()
        .take(limit)
        .map(|s| RenderedSuggestion {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            date_display: display_date(s.start, tz),
            time_display: format!(
                "{} - {}",
                display_time(s.start, tz),
                display_time(s.end, tz)
            ),
        })
        .collect();
    SuggestReport {
        suggestion_count: suggestions.len(),
        suggestions,
    }
}

#[derive(Serialize)]
pub struct BufferReport {
    pub placed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<TimeRange>,
    pub conflicts: Vec<RenderedConflict>,
}

pub fn buffer_report(placement: &BufferPlacement, tz: Tz) -> BufferReport {
    match placement {
        BufferPlacement::Clear(window) => BufferReport {
            placed: true,
            buffer: Some(TimeRange {
                start: window.start().to_rfc3339(),
                end: window.end().to_rfc3339(),
            }),
            conflicts: Vec::new(),
        },
        BufferPlacement::Blocked(conflicts) => BufferReport {
            placed: false,
            buffer: None,
            conflicts: conflicts
                .iter()
                .map(|c| RenderedConflict::new(c, tz))
                .collect(),
        },
    }
}
