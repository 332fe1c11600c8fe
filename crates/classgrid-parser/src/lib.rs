//! ICS-to-schedule extraction pipeline.
//!
//! Turns a raw iCalendar export into a [`classgrid_core::Schedule`] in four
//! staged passes:
//! 1. [`segment`]: split the text into `BEGIN:VEVENT`/`END:VEVENT` blocks
//! 2. [`fields`]: decode summary, location, description, and timestamps
//!    from one block
//! 3. [`rrule`]: decode the recurrence rule into weekdays and an event kind
//! 4. [`extract`]: run the stages in order and partition the results
//!
//! Extraction is total for any string input: malformed blocks are dropped,
//! never reported as errors.

pub mod extract;
pub mod fields;
pub mod rrule;
pub mod segment;

pub use extract::{extract_schedule, ExtractOptions, DEFAULT_TZID};
pub use fields::{decode_block, DecodedEvent, TimestampPatterns};
pub use rrule::{classify, Recurrence};
pub use segment::split_event_blocks;
