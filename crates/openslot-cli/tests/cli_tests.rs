//! Integration tests for the `openslot` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the free, check,
//! suggest, and buffer subcommands through the actual binary, including
//! stdin piping, fixture files, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn feeds_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/feeds.json")
}

fn failing_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/failing.json")
}

/// Command with the config file pointed away from any real home directory.
fn openslot() -> Command {
    let mut cmd = Command::cargo_bin("openslot").unwrap();
    cmd.env("OPENSLOT_CONFIG", "/nonexistent/openslot-config.json");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_finds_the_mondays_two_gaps() {
    // Busy 10:00-11:00 and 11:00-11:30 merge; free 09:00-10:00 and 11:30-17:00.
    openslot()
        .args([
            "free",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slot_count\": 2"))
        .stdout(predicate::str::contains("\"duration_minutes\": 60"))
        .stdout(predicate::str::contains("\"duration_minutes\": 330"))
        .stdout(predicate::str::contains("09:00 AM"))
        .stdout(predicate::str::contains("11:30 AM"));
}

#[test]
fn free_reads_feeds_from_stdin() {
    let feeds = std::fs::read_to_string(feeds_path()).unwrap();

    openslot()
        .args(["free", "--from", "2026-03-16", "--to", "2026-03-16"])
        .write_stdin(feeds)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slot_count\": 2"));
}

#[test]
fn free_limit_caps_emitted_slots() {
    openslot()
        .args([
            "free",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
            "--limit",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slot_count\": 1"));
}

#[test]
fn free_reports_failed_feeds_with_zero_slots() {
    // Every fetch failed: zero slots plus the diagnostics, not "all free".
    openslot()
        .args([
            "free",
            "-i",
            failing_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slot_count\": 0"))
        .stdout(predicate::str::contains("timeout"))
        .stdout(predicate::str::contains("HTTP 500"));
}

#[test]
fn free_rejects_inverted_working_hours() {
    openslot()
        .args([
            "free",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
            "--hours",
            "17-9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid working hours"));
}

#[test]
fn free_rejects_unknown_timezone() {
    openslot()
        .args([
            "free",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
            "--timezone",
            "Mars/Olympus_Mons",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}

#[test]
fn free_rejects_malformed_feed_json() {
    openslot()
        .args(["free", "--from", "2026-03-16", "--to", "2026-03-16"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse feed JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_flags_an_overlapping_candidate() {
    openslot()
        .args([
            "check",
            "-i",
            feeds_path(),
            "--start",
            "2026-03-16T10:30:00Z",
            "--end",
            "2026-03-16T11:15:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_conflicts\": true"))
        .stdout(predicate::str::contains("primary"));
}

#[test]
fn check_treats_touching_as_clear() {
    // Busy runs until 11:30; a candidate starting exactly then is free.
    openslot()
        .args([
            "check",
            "-i",
            feeds_path(),
            "--start",
            "2026-03-16T11:30:00Z",
            "--end",
            "2026-03-16T12:30:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_conflicts\": false"))
        .stdout(predicate::str::contains("\"conflict_count\": 0"));
}

#[test]
fn check_rejects_an_inverted_candidate() {
    openslot()
        .args([
            "check",
            "-i",
            feeds_path(),
            "--start",
            "2026-03-16T12:00:00Z",
            "--end",
            "2026-03-16T11:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Candidate range is invalid"));
}

// ─────────────────────────────────────────────────────────────────────────────
// suggest subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn suggest_offers_slots_around_busy_time() {
    openslot()
        .args([
            "suggest",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-16",
            "--duration",
            "60",
            "--after",
            "2026-03-16T00:00:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday, March 16, 2026"))
        // 09:00 fits before the 10:00 meeting; 09:30 would overlap it.
        .stdout(predicate::str::contains("09:00 AM - 10:00 AM"))
        .stdout(predicate::str::contains("09:30 AM - 10:30 AM").not());
}

#[test]
fn suggest_limit_caps_the_list() {
    openslot()
        .args([
            "suggest",
            "-i",
            feeds_path(),
            "--from",
            "2026-03-16",
            "--to",
            "2026-03-20",
            "--after",
            "2026-03-16T00:00:00Z",
            "--limit",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestion_count\": 3"));
}

// ─────────────────────────────────────────────────────────────────────────────
// buffer subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn buffer_places_cleanly_on_an_open_afternoon() {
    openslot()
        .args([
            "buffer",
            "-i",
            feeds_path(),
            "--event-start",
            "2026-03-16T14:00:00Z",
            "--minutes",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"placed\": true"))
        .stdout(predicate::str::contains("2026-03-16T13:30:00"));
}

#[test]
fn buffer_blocked_by_overlapping_meeting() {
    // Buffer 11:15-11:45 overlaps the 11:00-11:30 meeting.
    openslot()
        .args([
            "buffer",
            "-i",
            feeds_path(),
            "--event-start",
            "2026-03-16T11:45:00Z",
            "--minutes",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"placed\": false"))
        .stdout(predicate::str::contains("\"overlap_minutes\": 15"));
}

#[test]
fn buffer_rejects_a_zero_length_buffer() {
    openslot()
        .args([
            "buffer",
            "-i",
            feeds_path(),
            "--event-start",
            "2026-03-16T14:00:00Z",
            "--minutes",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
