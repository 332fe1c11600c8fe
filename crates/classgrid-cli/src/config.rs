//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/classgrid/config.toml` by default. Command-line flags
//! override file values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use classgrid_core::DayCode;
use classgrid_parser::DEFAULT_TZID;

/// Configuration for the classgrid client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Source calendar settings.
    #[serde(default)]
    pub calendar: CalendarSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Settings describing the source export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarSettings {
    /// TZID every timestamp in the export is pinned to.
    pub timezone: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TZID.to_string(),
        }
    }
}

/// Display settings for the rendered timetable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Keep the course-code suffix in displayed titles.
    pub show_class_code: bool,

    /// Granularity of the grid's time axis, in minutes.
    pub slot_minutes: u32,

    /// Weekday columns shown in the grid, in order.
    pub days: Vec<DayCode>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_class_code: false,
            slot_minutes: 30,
            days: DayCode::TEACHING_WEEK.to_vec(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("classgrid")
            .join("config.toml")
    }
}
