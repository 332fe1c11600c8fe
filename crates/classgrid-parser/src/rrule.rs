//! Recurrence rule classification.
//!
//! Decides the weekdays an event recurs on and whether the rule describes an
//! ongoing weekly series or degenerates to a single terminal occurrence (a
//! final exam). The UNTIL comparison is byte equality on the unparsed
//! 8-digit date tokens: both sides share one encoding, so no calendar
//! arithmetic is needed.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use classgrid_core::{DayCode, EventKind};

/// Matches the UNTIL component's 8-digit date.
static UNTIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"UNTIL=(\d{8})").expect("Invalid UNTIL regex"));

/// Matches the BYDAY component's comma-separated code list.
static BYDAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BYDAY=([^;]+)").expect("Invalid BYDAY regex"));

/// The decoded recurrence of one event block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    /// Weekdays the event recurs on; empty when the rule has no BYDAY.
    pub days: Vec<DayCode>,
    /// Regular weekly series, or single terminal occurrence.
    pub kind: EventKind,
}

/// Classifies a recurrence rule against the raw DTSTART date token.
pub fn classify(rule: &str, start_date_token: &str) -> Recurrence {
    let days = BYDAY_REGEX
        .captures(rule)
        .map(|caps| {
            caps[1]
                .split(',')
                .filter_map(|token| {
                    let token = token.trim();
                    match token.parse::<DayCode>() {
                        Ok(day) => Some(day),
                        Err(_) => {
                            warn!(token, "unrecognized BYDAY token; skipped");
                            None
                        }
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let kind = match UNTIL_REGEX.captures(rule) {
        Some(caps) if &caps[1] == start_date_token => EventKind::FinalExam,
        _ => EventKind::RegularCourse,
    };

    Recurrence { days, kind }
}
