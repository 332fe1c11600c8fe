//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// classgrid - Turn a class-schedule ICS export into a weekly timetable
#[derive(Debug, Parser)]
#[command(name = "classgrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Calendar export to read (.ics)
    pub file: PathBuf,

    /// Path to configuration file
    #[arg(long, short, env = "CLASSGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Output format flags ---
    /// Output the extracted schedule as JSON
    #[arg(long, group = "output_format")]
    pub json: bool,

    /// Only print the final-exams list
    #[arg(long, group = "output_format")]
    pub finals_only: bool,

    // --- Display options ---
    /// Keep the course-code suffix in displayed titles
    #[arg(long)]
    pub show_class_code: bool,

    /// Also print per-course details (description, location)
    #[arg(long)]
    pub details: bool,

    /// Granularity of the grid's time axis, in minutes
    #[arg(long)]
    pub slot_minutes: Option<u32>,

    // --- Source options ---
    /// TZID the export's timestamps are pinned to
    #[arg(long)]
    pub timezone: Option<String>,
}
