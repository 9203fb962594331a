//! Tests for busy-interval merging.

use chrono::{DateTime, TimeZone, Utc};
use openslot_engine::interval::TimeInterval;
use openslot_engine::merge::{clip, merge};

/// Helper: an interval on 2026-03-16 (a Monday) from hour:min to hour:min.
fn iv(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    TimeInterval::new(at(start_hour, start_min), at(end_hour, end_min)).unwrap()
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(merge(&[]).is_empty());
}

#[test]
fn single_interval_returned_unchanged() {
    let merged = merge(&[iv(9, 0, 10, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 10, 0)]);
}

#[test]
fn touching_intervals_merge_contiguously() {
    // [9,10) + [10,11) share no time point but form one occupied span.
    let merged = merge(&[iv(9, 0, 10, 0), iv(10, 0, 11, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 11, 0)]);
}

#[test]
fn overlapping_intervals_merge() {
    let merged = merge(&[iv(9, 0, 10, 30), iv(10, 0, 12, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
}

#[test]
fn contained_interval_collapses_to_container() {
    let merged = merge(&[iv(9, 0, 12, 0), iv(10, 0, 11, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
}

#[test]
fn duplicate_intervals_collapse_to_one() {
    let merged = merge(&[iv(9, 0, 10, 0), iv(9, 0, 10, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 10, 0)]);
}

#[test]
fn disjoint_intervals_stay_separate_and_sorted() {
    // Deliberately unsorted input.
    let merged = merge(&[iv(14, 0, 15, 0), iv(9, 0, 10, 0), iv(11, 0, 12, 0)]);
    assert_eq!(
        merged,
        vec![iv(9, 0, 10, 0), iv(11, 0, 12, 0), iv(14, 0, 15, 0)]
    );
}

#[test]
fn cascading_overlaps_merge_into_one() {
    let merged = merge(&[iv(9, 0, 10, 30), iv(10, 0, 11, 30), iv(11, 0, 12, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
}

#[test]
fn merge_is_idempotent() {
    let input = vec![
        iv(9, 0, 10, 0),
        iv(9, 30, 11, 0),
        iv(11, 0, 11, 30),
        iv(14, 0, 15, 0),
    ];
    let once = merge(&input);
    let twice = merge(&once);
    assert_eq!(once, twice);
}

#[test]
fn equal_starts_are_handled_deterministically() {
    // Two intervals with the same start; the shorter one is subsumed either way.
    let merged = merge(&[iv(9, 0, 11, 0), iv(9, 0, 10, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 11, 0)]);
}

#[test]
fn clip_drops_outside_and_clamps_crossing_intervals() {
    let intervals = vec![
        iv(7, 0, 9, 30),   // crosses the left edge
        iv(10, 0, 11, 0),  // inside
        iv(16, 30, 18, 0), // crosses the right edge
        iv(20, 0, 21, 0),  // entirely outside
    ];
    let clipped = clip(&intervals, at(8, 0), at(17, 0));
    assert_eq!(
        clipped,
        vec![iv(8, 0, 9, 30), iv(10, 0, 11, 0), iv(16, 30, 17, 0)]
    );
}

#[test]
fn clip_excludes_intervals_touching_the_window() {
    // [7,8) touches window start and [17,18) touches window end; neither
    // occupies any window time.
    let intervals = vec![iv(7, 0, 8, 0), iv(17, 0, 18, 0)];
    assert!(clip(&intervals, at(8, 0), at(17, 0)).is_empty());
}
