//! Report busy intervals that collide with one candidate time range.
//!
//! Uses open-interval overlap: a busy block ending exactly when the
//! candidate starts is NOT a conflict. This is deliberately the opposite
//! boundary rule from merging -- two adjoining busy blocks form one occupied
//! span, but a candidate slot immediately after a busy block is genuinely
//! free.

use serde::{Deserialize, Serialize};

use crate::interval::{BusyInterval, TimeInterval};

/// A busy interval that overlaps a candidate, with the overlap length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub busy: BusyInterval,
    pub overlap_minutes: i64,
}

/// Every busy interval overlapping `candidate`.
///
/// Overlap is `busy.start < candidate.end && busy.end > candidate.start`;
/// touching does not count. The full list (not a boolean) is returned so
/// callers can report exactly which events block a slot.
pub fn find_conflicts(busy: &[BusyInterval], candidate: &TimeInterval) -> Vec<Conflict> {
    busy.iter()
        .filter(|b| b.interval.overlaps(candidate))
        .map(|b| {
            let overlap_start = b.interval.start().max(candidate.start());
            let overlap_end = b.interval.end().min(candidate.end());
            Conflict {
                busy: b.clone(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            }
        })
        .collect()
}
