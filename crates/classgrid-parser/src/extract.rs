//! The extraction entry point: segment, decode, classify, aggregate.

use tracing::debug;

use classgrid_core::{CourseEvent, Schedule};

use crate::fields::{decode_block, TimestampPatterns};
use crate::rrule::classify;
use crate::segment::split_event_blocks;

/// Zone id the source exports pin their timestamps to.
pub const DEFAULT_TZID: &str = "Asia/Qatar";

/// Options for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// The single TZID every DTSTART/DTEND line must carry.
    pub tzid: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tzid: DEFAULT_TZID.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Options for a calendar pinned to the given zone id.
    pub fn with_tzid(tzid: impl Into<String>) -> Self {
        Self { tzid: tzid.into() }
    }
}

/// Extracts a schedule from raw calendar text.
///
/// Pure and total: any string input yields a `Schedule`, with malformed or
/// non-recurring blocks dropped along the way. Each source block
/// contributes at most one event, and both output sequences preserve the
/// order blocks appear in the text.
pub fn extract_schedule(text: &str, options: &ExtractOptions) -> Schedule {
    let patterns = TimestampPatterns::new(&options.tzid);
    let mut schedule = Schedule::default();

    for block in split_event_blocks(text) {
        let Some(decoded) = decode_block(block, &patterns) else {
            continue;
        };
        // Only recurrence-bearing blocks are schedulable class meetings;
        // finals appear as a degenerate one-occurrence rule.
        let Some(rule) = decoded.rrule.as_deref() else {
            debug!(summary = %decoded.summary, "block has no recurrence rule; skipped");
            continue;
        };
        let recurrence = classify(rule, &decoded.start_date_token);

        let event = CourseEvent::new(decoded.summary, decoded.start, decoded.end)
            .with_location(decoded.location)
            .with_description(decoded.description)
            .with_days(recurrence.days);
        schedule.push(recurrence.kind, event);
    }

    debug!(
        regular = schedule.regular_courses.len(),
        finals = schedule.final_exams.len(),
        "extraction finished"
    );
    schedule
}
