//! Feed-file reading: per-calendar busy data as JSON, from a file or stdin.

use anyhow::{Context, Result};
use openslot_engine::CalendarFeed;
use std::io::{self, Read};

/// Read and parse the feed list from `path`, or stdin when `path` is `None`.
///
/// The expected shape is an array of feeds:
///
/// ```json
/// [
///   {
///     "calendar_id": "primary",
///     "busy": [
///       {"start": "2026-03-16T10:00:00Z", "end": "2026-03-16T11:00:00Z"},
///       {"start": "2026-03-17T00:00:00Z", "end": "2026-03-18T00:00:00Z", "all_day": true}
///     ]
///   },
///   {"calendar_id": "shared", "error": "HTTP 403"}
/// ]
/// ```
pub fn read_feeds(path: Option<&str>) -> Result<Vec<CalendarFeed>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read feeds from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Failed to parse feed JSON")
}
