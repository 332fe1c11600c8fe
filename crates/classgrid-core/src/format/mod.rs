//! Display formatting for extracted schedules.
//!
//! The extractor keeps field text raw; everything display-facing lives here:
//! - [`unescape_text`]: turns raw ICS description text into readable lines
//! - [`strip_class_code`]: optional removal of the course-code suffix
//! - [`format_minutes`]: minutes-after-midnight to `h:MM AM/PM`
//! - [`WeekGrid`] (in [`grid`]): the weekly timetable model and its
//!   terminal rendering

mod grid;

use std::sync::LazyLock;

use regex::Regex;

pub use grid::{GridEntry, GridOptions, WeekGrid};

/// Matches a summary of the form "<title> <UPPERCASE code> <number> <rest>".
static CLASS_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*?)\s+[A-Z]+\s+\d+\s+").expect("Invalid class code regex")
});

/// Strips the structured course-code suffix from a summary.
///
/// Exports title courses as "Intro to Systems CS 101 L01"; with the
/// class-code display toggle off only the leading free text is shown.
/// Summaries that do not carry a code pass through unchanged.
pub fn strip_class_code(summary: &str) -> String {
    match CLASS_CODE_REGEX.captures(summary) {
        Some(caps) => caps[1].trim().to_string(),
        None => summary.to_string(),
    }
}

/// Unescapes raw ICS text for display.
///
/// Inverse of the extractor's raw-capture contract: removes line folds
/// (newline plus leading space), turns literal `\n` sequences into real
/// line breaks, and drops the remaining backslash escapes (`\,` `\;` `\\`).
pub fn unescape_text(raw: &str) -> String {
    let unfolded = raw.replace("\r\n ", "").replace("\n ", "");
    unfolded
        .split("\\n")
        .map(|line| line.replace('\\', ""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats minutes after midnight as a 12-hour clock label, e.g. "9:30 AM".
pub fn format_minutes(minutes: u32) -> String {
    let hours = (minutes / 60) % 24;
    let mins = minutes % 60;
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, mins, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod class_code {
        use super::*;

        #[test]
        fn strips_code_and_section() {
            assert_eq!(
                strip_class_code("Intro to Systems CS 101 L01"),
                "Intro to Systems"
            );
            assert_eq!(
                strip_class_code("Calculus II MATH 208 S02"),
                "Calculus II"
            );
        }

        #[test]
        fn leaves_plain_titles_untouched() {
            assert_eq!(strip_class_code("Thesis Seminar"), "Thesis Seminar");
            // No trailing section token after the number, so no match.
            assert_eq!(strip_class_code("Intro CS 101"), "Intro CS 101");
        }

        #[test]
        fn empty_summary() {
            assert_eq!(strip_class_code(""), "");
        }
    }

    mod unescape {
        use super::*;

        #[test]
        fn literal_newline_escapes_become_line_breaks() {
            assert_eq!(unescape_text("line one\\nline two"), "line one\nline two");
        }

        #[test]
        fn drops_remaining_backslash_escapes() {
            assert_eq!(
                unescape_text("Building: ENG\\, Floor 2\\; east wing"),
                "Building: ENG, Floor 2; east wing"
            );
        }

        #[test]
        fn removes_line_folds() {
            // ICS folds long values as CRLF plus a single leading space.
            assert_eq!(
                unescape_text("a long wrapped\r\n  value"),
                "a long wrapped value"
            );
            assert_eq!(unescape_text("wrapped\n value"), "wrappedvalue");
        }

        #[test]
        fn plain_text_passes_through() {
            assert_eq!(unescape_text("nothing special"), "nothing special");
            assert_eq!(unescape_text(""), "");
        }
    }

    mod clock {
        use super::*;

        #[test]
        fn morning_and_afternoon() {
            assert_eq!(format_minutes(9 * 60), "9:00 AM");
            assert_eq!(format_minutes(9 * 60 + 30), "9:30 AM");
            assert_eq!(format_minutes(13 * 60 + 5), "1:05 PM");
        }

        #[test]
        fn midnight_and_noon() {
            assert_eq!(format_minutes(0), "12:00 AM");
            assert_eq!(format_minutes(12 * 60), "12:00 PM");
        }
    }
}

#[cfg(test)]
mod golden_tests;
