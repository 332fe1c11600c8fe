//! Weekly timetable grid model and terminal rendering.

use crate::event::{CourseEvent, DayCode};
use crate::format::format_minutes;

/// Width of one day cell in the rendered grid.
const CELL_WIDTH: usize = 20;

/// Width of the time-label gutter ("12:30 PM" is the widest label).
const GUTTER_WIDTH: usize = 8;

/// Options controlling grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Weekday columns, in display order.
    pub days: Vec<DayCode>,
    /// Granularity of the time axis in minutes.
    pub slot_minutes: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            days: DayCode::TEACHING_WEEK.to_vec(),
            slot_minutes: 30,
        }
    }
}

/// One event placed in a day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    /// Display title (class code already stripped if the toggle is off).
    pub title: String,
    /// Start, minutes after midnight.
    pub start_minutes: u32,
    /// End, minutes after midnight.
    pub end_minutes: u32,
}

/// A weekly grid: fixed weekday columns, time-of-day rows spanning the
/// earliest start to the latest end over all events, rounded outward to
/// the slot granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    days: Vec<DayCode>,
    slot_minutes: u32,
    first_slot: u32,
    last_slot: u32,
    columns: Vec<Vec<GridEntry>>,
}

impl WeekGrid {
    /// Builds a grid from recurring events.
    ///
    /// Events whose `days` do not intersect the configured columns simply
    /// do not appear; an empty event list yields an empty grid.
    pub fn build(events: &[CourseEvent], titles: &[String], options: &GridOptions) -> Self {
        debug_assert_eq!(events.len(), titles.len());
        let slot = options.slot_minutes.max(1);

        let mut min_start = u32::MAX;
        let mut max_end = 0u32;
        for event in events {
            min_start = min_start.min(event.start_minutes());
            max_end = max_end.max(event.end_minutes());
        }

        let (first_slot, last_slot) = if events.is_empty() || max_end <= min_start {
            (0, 0)
        } else {
            (min_start / slot * slot, max_end.div_ceil(slot) * slot)
        };

        let columns = options
            .days
            .iter()
            .map(|&day| {
                events
                    .iter()
                    .zip(titles)
                    .filter(|(event, _)| event.occurs_on(day))
                    .map(|(event, title)| GridEntry {
                        title: title.clone(),
                        start_minutes: event.start_minutes(),
                        end_minutes: event.end_minutes(),
                    })
                    .collect()
            })
            .collect();

        Self {
            days: options.days.clone(),
            slot_minutes: slot,
            first_slot,
            last_slot,
            columns,
        }
    }

    /// Returns true if no column holds any entry.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Bounds of the time axis as minutes after midnight, `[first, last)`.
    pub fn time_bounds(&self) -> (u32, u32) {
        (self.first_slot, self.last_slot)
    }

    /// Renders the grid as an aligned text table.
    pub fn render_tty(&self) -> String {
        if self.is_empty() {
            return "(no scheduled events)\n".to_string();
        }

        let mut out = String::new();

        out.push_str(&" ".repeat(GUTTER_WIDTH));
        for day in &self.days {
            out.push_str(&format!("  {:<CELL_WIDTH$}", day.full_name()));
        }
        trim_line(&mut out);

        let mut slot_start = self.first_slot;
        while slot_start < self.last_slot {
            let slot_end = slot_start + self.slot_minutes;
            out.push_str(&format!(
                "{:>GUTTER_WIDTH$}",
                format_minutes(slot_start)
            ));
            for column in &self.columns {
                let cell = column
                    .iter()
                    .find(|e| e.start_minutes < slot_end && e.end_minutes > slot_start)
                    .map(|e| {
                        if e.start_minutes >= slot_start {
                            truncate(&e.title, CELL_WIDTH)
                        } else {
                            "|".to_string()
                        }
                    })
                    .unwrap_or_default();
                out.push_str(&format!("  {:<CELL_WIDTH$}", cell));
            }
            trim_line(&mut out);
            slot_start = slot_end;
        }

        out
    }
}

/// Trims trailing padding and terminates the current line.
fn trim_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

/// Truncates a title to the cell width, with an ellipsis when cut.
fn truncate(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        title.to_string()
    } else {
        let cut: String = title.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;

    fn dt(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn event(summary: &str, start: NaiveDateTime, end: NaiveDateTime, days: &[DayCode]) -> CourseEvent {
        CourseEvent::new(summary, start, end).with_days(days.to_vec())
    }

    fn build(events: &[CourseEvent], options: &GridOptions) -> WeekGrid {
        let titles: Vec<String> = events.iter().map(|e| e.summary.clone()).collect();
        WeekGrid::build(events, &titles, options)
    }

    #[test]
    fn empty_events_yield_empty_grid() {
        let grid = build(&[], &GridOptions::default());
        assert!(grid.is_empty());
        assert_eq!(grid.time_bounds(), (0, 0));
        assert_eq!(grid.render_tty(), "(no scheduled events)\n");
    }

    #[test]
    fn bounds_round_outward_to_slot() {
        let events = [event(
            "Systems",
            dt(9, 5),
            dt(9, 55),
            &[DayCode::Mo],
        )];
        let grid = build(&events, &GridOptions::default());
        assert_eq!(grid.time_bounds(), (540, 600));
    }

    #[test]
    fn bounds_span_all_events() {
        let events = [
            event("Early", dt(8, 0), dt(9, 0), &[DayCode::Su]),
            event("Late", dt(15, 30), dt(17, 0), &[DayCode::We]),
        ];
        let grid = build(&events, &GridOptions::default());
        assert_eq!(grid.time_bounds(), (480, 1020));
    }

    #[test]
    fn render_places_title_in_starting_slot() {
        let events = [event("Systems", dt(9, 0), dt(10, 0), &[DayCode::Mo])];
        let grid = build(&events, &GridOptions::default());
        let rendered = grid.render_tty();
        let lines: Vec<&str> = rendered.lines().collect();

        // Header plus two 30-minute rows.
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Sunday"));
        assert!(lines[0].contains("Monday"));
        assert!(lines[1].starts_with(" 9:00 AM"));
        assert!(lines[1].contains("Systems"));
        // Continuation slot shows a bar, not the title again.
        assert!(lines[2].starts_with(" 9:30 AM"));
        assert!(lines[2].contains('|'));
        assert!(!lines[2].contains("Systems"));
    }

    #[test]
    fn event_appears_in_each_of_its_day_columns() {
        let events = [event(
            "Systems",
            dt(9, 0),
            dt(9, 30),
            &[DayCode::Mo, DayCode::We],
        )];
        let grid = build(&events, &GridOptions::default());
        let rendered = grid.render_tty();
        let row = rendered.lines().nth(1).unwrap();
        assert_eq!(row.matches("Systems").count(), 2);
    }

    #[test]
    fn days_outside_columns_are_not_shown() {
        let events = [event("Weekend Lab", dt(9, 0), dt(10, 0), &[DayCode::Sa])];
        let grid = build(&events, &GridOptions::default());
        assert!(grid.is_empty());
    }

    #[test]
    fn custom_slot_granularity() {
        let events = [event("Systems", dt(9, 10), dt(9, 50), &[DayCode::Mo])];
        let grid = build(
            &events,
            &GridOptions {
                slot_minutes: 60,
                ..GridOptions::default()
            },
        );
        assert_eq!(grid.time_bounds(), (540, 600));
        // Single one-hour row.
        assert_eq!(grid.render_tty().lines().count(), 2);
    }

    #[test]
    fn long_titles_are_truncated() {
        let events = [event(
            "A Very Long Course Title That Overflows The Cell",
            dt(9, 0),
            dt(9, 30),
            &[DayCode::Mo],
        )];
        let grid = build(&events, &GridOptions::default());
        let rendered = grid.render_tty();
        assert!(rendered.contains('…'));
        assert!(!rendered.contains("Overflows"));
    }
}
