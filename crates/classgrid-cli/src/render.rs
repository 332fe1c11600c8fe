//! Schedule rendering: weekly grid, finals list, per-course details.

use classgrid_core::{
    format_minutes, strip_class_code, unescape_text, CourseEvent, GridOptions, Schedule, WeekGrid,
};

/// Options controlling text output.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Keep the course-code suffix in displayed titles.
    pub show_class_code: bool,
    /// Grid layout options.
    pub grid: GridOptions,
    /// Append per-course details after the grid.
    pub details: bool,
}

/// The title as displayed, honoring the class-code toggle.
fn display_title(summary: &str, show_class_code: bool) -> String {
    if show_class_code {
        summary.to_string()
    } else {
        strip_class_code(summary)
    }
}

/// Renders the weekly grid for the regular courses.
pub fn render_grid(courses: &[CourseEvent], options: &RenderOptions) -> String {
    let titles: Vec<String> = courses
        .iter()
        .map(|c| display_title(&c.summary, options.show_class_code))
        .collect();
    WeekGrid::build(courses, &titles, &options.grid).render_tty()
}

/// Renders the final-exams list, one line per sitting.
pub fn render_finals(finals: &[CourseEvent], options: &RenderOptions) -> String {
    if finals.is_empty() {
        return "Final exams: none found\n".to_string();
    }

    let mut out = String::from("Final exams:\n");
    for exam in finals {
        out.push_str(&format!(
            "  {}  {} - {}  {}\n",
            exam.start.format("%Y-%m-%d"),
            format_minutes(exam.start_minutes()),
            format_minutes(exam.end_minutes()),
            display_title(&exam.summary, options.show_class_code),
        ));
    }
    out
}

/// Renders per-course details: meeting days, times, location, description.
pub fn render_details(schedule: &Schedule, options: &RenderOptions) -> String {
    let mut out = String::new();
    for event in schedule.regular_courses.iter().chain(&schedule.final_exams) {
        out.push_str(&display_title(&event.summary, options.show_class_code));
        out.push('\n');

        if event.is_recurring() {
            let days: Vec<&str> = event.days.iter().map(|d| d.as_str()).collect();
            out.push_str(&format!("  days: {}\n", days.join(", ")));
        }
        out.push_str(&format!(
            "  time: {} - {}\n",
            format_minutes(event.start_minutes()),
            format_minutes(event.end_minutes())
        ));
        for line in event.location.lines() {
            out.push_str(&format!("  {}\n", line.trim_end()));
        }
        if !event.description.is_empty() {
            for line in unescape_text(&event.description).lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out.push('\n');
    }
    out
}

/// Renders the full default output: grid, finals list, optional details.
pub fn render_schedule(schedule: &Schedule, options: &RenderOptions) -> String {
    let mut out = render_grid(&schedule.regular_courses, options);
    out.push('\n');
    out.push_str(&render_finals(&schedule.final_exams, options));
    if options.details {
        out.push('\n');
        out.push_str(&render_details(schedule, options));
    }
    out
}
