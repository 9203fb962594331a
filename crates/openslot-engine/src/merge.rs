//! Merge possibly-overlapping busy intervals into a minimal disjoint set.
//!
//! Sorts by start time, then sweeps left to right extending the current
//! interval while the next one starts at or before its end. Touching
//! intervals merge: `[a,b)` followed by `[b,c)` becomes `[a,c)`, since two
//! adjoining busy blocks form one occupied span.

use chrono::{DateTime, Utc};

use crate::interval::TimeInterval;

/// Merge intervals into a sorted, pairwise-disjoint, maximal set.
///
/// The union of the output equals the union of the input; no two output
/// intervals overlap or touch. Ties on start time sort by end ascending so
/// the sweep is deterministic. Empty input yields empty output; a single
/// interval comes back unchanged.
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<(DateTime<Utc>, DateTime<Utc>)> = intervals
        .iter()
        .map(|iv| (iv.start(), iv.end()))
        .collect();
    sorted.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in sorted {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or touching -- extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
        .into_iter()
        .map(|(start, end)| TimeInterval::new_unchecked(start, end))
        .collect()
}

/// Restrict a set of intervals to `[window_start, window_end)`.
///
/// Intervals entirely outside the window are dropped; those crossing a
/// boundary are clamped to it. A sorted disjoint input stays sorted and
/// disjoint.
pub fn clip(
    intervals: &[TimeInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<TimeInterval> {
    intervals
        .iter()
        .filter(|iv| iv.start() < window_end && iv.end() > window_start)
        .map(|iv| {
            TimeInterval::new_unchecked(iv.start().max(window_start), iv.end().min(window_end))
        })
        .collect()
}
