//! Field decoding for one event block.
//!
//! Every field is recovered independently by line-pattern matching; only the
//! two timestamps gate inclusion. The description is captured raw, escape
//! sequences intact; unescaping belongs to the display layer
//! ([`classgrid_core::format::unescape_text`]).

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

/// Matches the remainder of a SUMMARY line.
static SUMMARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SUMMARY:([^\r\n]+)").expect("Invalid summary regex"));

/// Matches a "Building: <B> Room: <R>" pattern embedded in free text.
static BUILDING_ROOM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Building:\s?(.+?)\s?Room:\s?([^\r\n]+)").expect("Invalid building/room regex")
});

/// Captures a DESCRIPTION value across physical lines, stopping before the
/// next line that opens a new field (leading ASCII uppercase), a blank
/// line, or end of block.
static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)DESCRIPTION:(.+?)(?:\r?\n[A-Z]|\r?\n\r?\n|\r?\n$|$)")
        .expect("Invalid description regex")
});

/// Matches the remainder of an RRULE line.
static RRULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RRULE:([^\r\n]+)").expect("Invalid rrule regex"));

/// Timestamp patterns for one configured time zone.
///
/// The export pins every timestamp to a single `TZID`; lines with any other
/// qualifier (or none) are treated as unparseable and reject the block.
#[derive(Debug)]
pub struct TimestampPatterns {
    start: Regex,
    end: Regex,
}

impl TimestampPatterns {
    /// Compiles the `DTSTART`/`DTEND` patterns for the given zone id.
    pub fn new(tzid: &str) -> Self {
        let zone = regex::escape(tzid);
        let start = Regex::new(&format!(r"DTSTART;TZID={zone}:(\d{{8}})T(\d{{6}})"))
            .expect("Invalid DTSTART regex");
        let end = Regex::new(&format!(r"DTEND;TZID={zone}:(\d{{8}})T(\d{{6}})"))
            .expect("Invalid DTEND regex");
        Self { start, end }
    }
}

/// One event block with its fields decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// The raw 8-digit DTSTART date token, kept for the UNTIL comparison.
    pub start_date_token: String,
    /// The recurrence rule text, when the block carries one.
    pub rrule: Option<String>,
}

/// Decodes one block, or `None` when its timestamps are missing, carry the
/// wrong zone qualifier, or do not decode to a valid start <= end pair.
pub fn decode_block(block: &str, patterns: &TimestampPatterns) -> Option<DecodedEvent> {
    let start_caps = patterns.start.captures(block);
    let end_caps = patterns.end.captures(block);
    let (Some(start_caps), Some(end_caps)) = (start_caps, end_caps) else {
        debug!("block missing DTSTART or DTEND; dropped");
        return None;
    };

    let start = parse_stamp(&start_caps[1], &start_caps[2])?;
    let end = parse_stamp(&end_caps[1], &end_caps[2])?;
    if start > end {
        debug!(%start, %end, "block start after end; dropped");
        return None;
    }

    let summary = SUMMARY_REGEX
        .captures(block)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let location = BUILDING_ROOM_REGEX
        .captures(block)
        .map(|caps| format!("Building: {} \nRoom: {}", &caps[1], &caps[2]))
        .unwrap_or_default();

    let description = DESCRIPTION_REGEX
        .captures(block)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let rrule = RRULE_REGEX.captures(block).map(|caps| caps[1].to_string());

    Some(DecodedEvent {
        summary,
        location,
        description,
        start,
        end,
        start_date_token: start_caps[1].to_string(),
        rrule,
    })
}

/// Parses the 8-digit date and 6-digit time tokens into a wall-clock value.
fn parse_stamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y%m%dT%H%M%S") {
        Ok(stamp) => Some(stamp),
        Err(error) => {
            debug!(date, time, %error, "unparseable timestamp; block dropped");
            None
        }
    }
}
