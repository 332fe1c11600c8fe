//! Event types for course schedules.
//!
//! This module provides the core types produced by the extractor:
//! - [`CourseEvent`]: A single class meeting or final-exam sitting
//! - [`DayCode`]: Two-letter RFC 5545 weekday codes (`SU` .. `SA`)
//! - [`EventKind`]: Regular weekly course vs. single-occurrence final exam
//! - [`Schedule`]: The two ordered output sequences

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a weekday token is not one of the seven codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized weekday code: {0}")]
pub struct ParseDayCodeError(pub String);

/// A two-letter weekday code as used in `BYDAY` recurrence lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayCode {
    Su,
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
}

impl DayCode {
    /// All seven codes, Sunday first.
    pub const ALL: [DayCode; 7] = [
        Self::Su,
        Self::Mo,
        Self::Tu,
        Self::We,
        Self::Th,
        Self::Fr,
        Self::Sa,
    ];

    /// The Sunday-to-Thursday teaching week used by the source calendars.
    pub const TEACHING_WEEK: [DayCode; 5] =
        [Self::Su, Self::Mo, Self::Tu, Self::We, Self::Th];

    /// Returns the two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Su => "SU",
            Self::Mo => "MO",
            Self::Tu => "TU",
            Self::We => "WE",
            Self::Th => "TH",
            Self::Fr => "FR",
            Self::Sa => "SA",
        }
    }

    /// Returns the full English weekday name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Su => "Sunday",
            Self::Mo => "Monday",
            Self::Tu => "Tuesday",
            Self::We => "Wednesday",
            Self::Th => "Thursday",
            Self::Fr => "Friday",
            Self::Sa => "Saturday",
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayCode {
    type Err = ParseDayCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SU" => Ok(Self::Su),
            "MO" => Ok(Self::Mo),
            "TU" => Ok(Self::Tu),
            "WE" => Ok(Self::We),
            "TH" => Ok(Self::Th),
            "FR" => Ok(Self::Fr),
            "SA" => Ok(Self::Sa),
            other => Err(ParseDayCodeError(other.to_string())),
        }
    }
}

/// Classification of a decoded event block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An ongoing weekly class series.
    RegularCourse,
    /// A recurrence rule that degenerates to a single terminal occurrence.
    FinalExam,
}

/// A single course meeting extracted from a calendar export.
///
/// Value object: constructed once by the extractor and never mutated
/// afterward. `start` and `end` are wall-clock values in the source
/// calendar's single configured zone; no offset is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEvent {
    /// Course title plus section code, e.g. "Intro to Systems CS 101 L01".
    pub summary: String,
    /// First occurrence start, local wall-clock time.
    pub start: NaiveDateTime,
    /// First occurrence end, local wall-clock time.
    pub end: NaiveDateTime,
    /// Normalized two-line "Building: X \nRoom: Y" string, or empty.
    pub location: String,
    /// Raw description text; escape sequences preserved for later display.
    pub description: String,
    /// Weekdays on which the event recurs; empty when the rule has no BYDAY.
    pub days: Vec<DayCode>,
}

impl CourseEvent {
    /// Creates a new event with empty location, description, and days.
    pub fn new(summary: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
            location: String::new(),
            description: String::new(),
            days: Vec::new(),
        }
    }

    /// Builder method to set the location string.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the raw description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the recurring weekdays.
    pub fn with_days(mut self, days: Vec<DayCode>) -> Self {
        self.days = days;
        self
    }

    /// Returns true if the event carries at least one recurring weekday.
    pub fn is_recurring(&self) -> bool {
        !self.days.is_empty()
    }

    /// Returns true if the event meets on the given weekday.
    pub fn occurs_on(&self, day: DayCode) -> bool {
        self.days.contains(&day)
    }

    /// Start time as minutes after midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    /// End time as minutes after midnight.
    pub fn end_minutes(&self) -> u32 {
        self.end.hour() * 60 + self.end.minute()
    }

    /// Duration of one meeting in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The extractor's output: regular courses and final exams, each in
/// source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Ongoing weekly class series, in order of appearance.
    pub regular_courses: Vec<CourseEvent>,
    /// Single-occurrence final exams, in order of appearance.
    pub final_exams: Vec<CourseEvent>,
}

impl Schedule {
    /// Appends an event to the sequence named by its kind.
    pub fn push(&mut self, kind: EventKind, event: CourseEvent) {
        match kind {
            EventKind::RegularCourse => self.regular_courses.push(event),
            EventKind::FinalExam => self.final_exams.push(event),
        }
    }

    /// Total number of events across both sequences.
    pub fn len(&self) -> usize {
        self.regular_courses.len() + self.final_exams.len()
    }

    /// Returns true if neither sequence holds any event.
    pub fn is_empty(&self) -> bool {
        self.regular_courses.is_empty() && self.final_exams.is_empty()
    }
}
