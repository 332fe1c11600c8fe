//! classgrid CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use classgrid_cli::cli::Cli;
use classgrid_cli::config::ClientConfig;
use classgrid_cli::error::{ClientError, ClientResult};
use classgrid_cli::intake::read_calendar_file;
use classgrid_cli::render::{render_finals, render_schedule, RenderOptions};
use classgrid_core::GridOptions;
use classgrid_parser::{extract_schedule, ExtractOptions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    // Load configuration; flags override file values.
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(ClientError::Config)?
    } else {
        ClientConfig::load().unwrap_or_default()
    };

    let tzid = cli
        .timezone
        .clone()
        .unwrap_or_else(|| config.calendar.timezone.clone());

    // Intake must fail before the extractor is ever invoked.
    let text = read_calendar_file(&cli.file).await?;

    let schedule = extract_schedule(&text, &ExtractOptions::with_tzid(tzid));

    if cli.json {
        let json = serde_json::to_string_pretty(&schedule)
            .map_err(|e| ClientError::Output(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    if schedule.is_empty() {
        // Distinct from a failed read: the file was fine, it just held no
        // schedulable class meetings.
        println!("No course events found in {}.", cli.file.display());
        return Ok(());
    }

    let options = RenderOptions {
        show_class_code: cli.show_class_code || config.display.show_class_code,
        grid: GridOptions {
            days: config.display.days.clone(),
            slot_minutes: cli.slot_minutes.unwrap_or(config.display.slot_minutes),
        },
        details: cli.details,
    };

    if cli.finals_only {
        print!("{}", render_finals(&schedule.final_exams, &options));
        return Ok(());
    }

    print!("{}", render_schedule(&schedule, &options));
    Ok(())
}
