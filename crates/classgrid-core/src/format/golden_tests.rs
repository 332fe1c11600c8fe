//! Golden tests for grid rendering.
//!
//! These tests use insta inline snapshots to pin down the exact text layout
//! of the weekly grid. Run with `cargo insta review` after intentional
//! layout changes.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{CourseEvent, DayCode};
use crate::format::{GridOptions, WeekGrid};

fn dt(h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn event(summary: &str, start: NaiveDateTime, end: NaiveDateTime, days: &[DayCode]) -> CourseEvent {
    CourseEvent::new(summary, start, end).with_days(days.to_vec())
}

fn render(events: &[CourseEvent]) -> String {
    let titles: Vec<String> = events.iter().map(|e| e.summary.clone()).collect();
    WeekGrid::build(events, &titles, &GridOptions::default()).render_tty()
}

#[test]
fn tty_empty() {
    insta::assert_snapshot!(render(&[]), @"(no scheduled events)");
}

#[test]
fn tty_single_event_with_continuation() {
    let events = [event("Systems", dt(10, 0), dt(11, 0), &[DayCode::Mo])];
    insta::assert_snapshot!(render(&events), @r"
              Sunday                Monday                Tuesday               Wednesday             Thursday
    10:00 AM                        Systems
    10:30 AM                        |
    ");
}

#[test]
fn tty_multiple_events() {
    let events = [
        event("Systems", dt(10, 0), dt(11, 0), &[DayCode::Mo, DayCode::We]),
        event(
            "Calculus",
            dt(11, 0),
            dt(12, 20),
            &[DayCode::Su, DayCode::Tu, DayCode::Th],
        ),
    ];
    insta::assert_snapshot!(render(&events), @r"
              Sunday                Monday                Tuesday               Wednesday             Thursday
    10:00 AM                        Systems                                     Systems
    10:30 AM                        |                                           |
    11:00 AM  Calculus                                    Calculus                                    Calculus
    11:30 AM  |                                           |                                           |
    12:00 PM  |                                           |                                           |
    ");
}

#[test]
fn tty_title_truncation() {
    let events = [event(
        "Advanced Distributed Systems",
        dt(10, 0),
        dt(10, 30),
        &[DayCode::Mo],
    )];
    insta::assert_snapshot!(render(&events), @r"
              Sunday                Monday                Tuesday               Wednesday             Thursday
    10:00 AM                        Advanced Distribute…
    ");
}
