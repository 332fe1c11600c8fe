//! Core types: course events, weekday codes, schedule formatting

pub mod event;
pub mod format;

pub use event::{CourseEvent, DayCode, EventKind, ParseDayCodeError, Schedule};
pub use format::{
    format_minutes, strip_class_code, unescape_text, GridEntry, GridOptions, WeekGrid,
};
