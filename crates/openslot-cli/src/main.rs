//! `openslot` CLI — free-slot scanning, conflict checks, meeting suggestions,
//! and travel-buffer planning over already-fetched calendar busy data.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for one day (feeds piped via stdin)
//! cat feeds.json | openslot free --from 2026-03-16 --to 2026-03-16
//!
//! # Free slots for a week, custom hours and timezone
//! openslot free -i feeds.json --from 2026-03-16 --to 2026-03-20 \
//!   --hours 10-18 --timezone America/New_York --min-duration 45
//!
//! # Is this candidate slot clear?
//! openslot check -i feeds.json --start 2026-03-16T14:00:00Z --end 2026-03-16T15:00:00Z
//!
//! # Suggest meeting times on a 30-minute grid
//! openslot suggest -i feeds.json --from 2026-03-16 --to 2026-03-20 --duration 60
//!
//! # Plan a 30-minute travel buffer before an event
//! openslot buffer -i feeds.json --event-start 2026-03-16T14:00:00Z --minutes 30
//! ```
//!
//! Feeds are an array of per-calendar fetch outcomes; a feed may carry an
//! `error` instead of busy data, in which case it is skipped and reported in
//! the output rather than failing the whole query.

mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use openslot_engine::scan::{DateRange, WorkingWindow};
use openslot_engine::{
    collect_busy, find_conflicts, plan_travel_buffer, reconcile, suggest_meeting_times,
    TimeInterval,
};
use serde::Serialize;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "openslot",
    version,
    about = "Multi-calendar free/busy reconciliation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free slots across a date range
    Free {
        /// Feed JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First day to scan (inclusive), e.g. 2026-03-16
        #[arg(long)]
        from: NaiveDate,
        /// Last day to scan (inclusive)
        #[arg(long)]
        to: NaiveDate,
        /// Working hours as "START-END", e.g. 9-17
        #[arg(long)]
        hours: Option<String>,
        /// IANA timezone for the working window and display times
        #[arg(long)]
        timezone: Option<String>,
        /// Minimum slot length in minutes
        #[arg(long)]
        min_duration: Option<i64>,
        /// Scan Saturdays and Sundays too
        #[arg(long)]
        include_weekends: bool,
        /// Emit at most this many slots
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check one candidate time range for conflicts
    Check {
        /// Feed JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Candidate start, RFC 3339 (e.g. 2026-03-16T14:00:00Z)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Candidate end, RFC 3339
        #[arg(long)]
        end: DateTime<Utc>,
        /// IANA timezone for display times
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Suggest conflict-free meeting times on a fixed grid
    Suggest {
        /// Feed JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First day to consider (inclusive)
        #[arg(long)]
        from: NaiveDate,
        /// Last day to consider (inclusive)
        #[arg(long)]
        to: NaiveDate,
        /// Meeting length in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
        /// Candidate grid step in minutes
        #[arg(long, default_value_t = 30)]
        step: i64,
        /// Working hours as "START-END", e.g. 9-17
        #[arg(long)]
        hours: Option<String>,
        /// IANA timezone for the working window and display times
        #[arg(long)]
        timezone: Option<String>,
        /// Only offer candidates starting at or after this instant
        /// (defaults to now)
        #[arg(long)]
        after: Option<DateTime<Utc>>,
        /// Consider Saturdays and Sundays too
        #[arg(long)]
        include_weekends: bool,
        /// Emit at most this many suggestions
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Plan a travel buffer ending at an event's start
    Buffer {
        /// Feed JSON file (reads from stdin if omitted); must not include
        /// the event being buffered
        #[arg(short, long)]
        input: Option<String>,
        /// Event start, RFC 3339
        #[arg(long)]
        event_start: DateTime<Utc>,
        /// Buffer length in minutes
        #[arg(long, default_value_t = 30)]
        minutes: i64,
        /// IANA timezone for display times
        #[arg(long)]
        timezone: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Free {
            input,
            from,
            to,
            hours,
            timezone,
            min_duration,
            include_weekends,
            limit,
        } => {
            let feeds = input::read_feeds(input.as_deref())?;
            let tz = resolve_timezone(timezone.as_deref(), &config)?;
            let (window, hours_label) = resolve_window(hours.as_deref(), &config)?;
            let min_duration = min_duration.or(config.min_duration_minutes).unwrap_or(30);

            let availability = reconcile(
                &feeds,
                DateRange::new(from, to),
                window,
                tz,
                min_duration,
                !include_weekends,
            )?;

            print_json(&render::free_report(
                &availability,
                tz,
                &hours_label,
                min_duration,
                limit,
            ))
        }
        Commands::Check {
            input,
            start,
            end,
            timezone,
        } => {
            let feeds = input::read_feeds(input.as_deref())?;
            let tz = resolve_timezone(timezone.as_deref(), &config)?;
            let candidate = TimeInterval::new(start, end)
                .context("Candidate range is invalid")?;

            let (busy, skipped) = collect_busy(&feeds, tz);
            let conflicts = find_conflicts(&busy, &candidate);

            print_json(&render::check_report(&conflicts, &candidate, &skipped, tz))
        }
        Commands::Suggest {
            input,
            from,
            to,
            duration,
            step,
            hours,
            timezone,
            after,
            include_weekends,
            limit,
        } => {
            let feeds = input::read_feeds(input.as_deref())?;
            let tz = resolve_timezone(timezone.as_deref(), &config)?;
            let (window, _) = resolve_window(hours.as_deref(), &config)?;
            let earliest = after.unwrap_or_else(Utc::now);

            let (busy, _skipped) = collect_busy(&feeds, tz);
            let intervals: Vec<TimeInterval> = busy.iter().map(|b| b.interval).collect();

            let suggestions = suggest_meeting_times(
                &intervals,
                DateRange::new(from, to),
                window,
                tz,
                duration,
                step,
                Some(earliest),
                !include_weekends,
            )?;

            print_json(&render::suggest_report(&suggestions, tz, limit))
        }
        Commands::Buffer {
            input,
            event_start,
            minutes,
            timezone,
        } => {
            let feeds = input::read_feeds(input.as_deref())?;
            let tz = resolve_timezone(timezone.as_deref(), &config)?;

            let (busy, _skipped) = collect_busy(&feeds, tz);
            let placement = plan_travel_buffer(&busy, event_start, minutes)?;

            print_json(&render::buffer_report(&placement, tz))
        }
    }
}

/// Flag value, then config file, then UTC.
fn resolve_timezone(flag: Option<&str>, config: &Config) -> Result<Tz> {
    let name = flag
        .or(config.timezone.as_deref())
        .unwrap_or("UTC");
    name.parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", name))
}

/// Flag value, then config file, then 9-17. Returns the window plus the
/// label echoed in reports.
fn resolve_window(flag: Option<&str>, config: &Config) -> Result<(WorkingWindow, String)> {
    let spec = flag.or(config.working_hours.as_deref()).unwrap_or("9-17");
    let window: WorkingWindow = spec
        .parse()
        .with_context(|| format!("Invalid working hours: {}", spec))?;
    Ok((window, spec.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
