//! Calendar file intake.
//!
//! The extractor's only upstream contract: deliver the complete decoded
//! text of a user-supplied `.ics` file, or fail before extraction is ever
//! invoked. A failed intake must be distinguishable from an export that
//! simply contained zero events.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised before the extractor runs.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The path does not carry the calendar-file extension.
    #[error("not a calendar file (expected .ics): {}", .0.display())]
    NotCalendarFile(PathBuf),

    /// Reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a calendar export into memory.
///
/// Rejects non-`.ics` paths without touching the filesystem, then performs
/// a single whole-file read.
pub async fn read_calendar_file(path: &Path) -> Result<String, IntakeError> {
    let is_ics = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ics"));
    if !is_ics {
        return Err(IntakeError::NotCalendarFile(path.to_path_buf()));
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = text.len(), "calendar file read");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn rejects_non_ics_extension() {
        let err = read_calendar_file(Path::new("schedule.txt")).await.unwrap_err();
        assert!(matches!(err, IntakeError::NotCalendarFile(_)));

        let err = read_calendar_file(Path::new("schedule")).await.unwrap_err();
        assert!(matches!(err, IntakeError::NotCalendarFile(_)));
    }

    #[tokio::test]
    async fn extension_check_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.ICS");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n")
            .unwrap();

        let text = read_calendar_file(&path).await.unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR"));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_calendar_file(&dir.path().join("gone.ics"))
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
    }

    #[tokio::test]
    async fn reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semester.ics");
        std::fs::write(&path, "BEGIN:VEVENT\r\nEND:VEVENT\r\n").unwrap();

        let text = read_calendar_file(&path).await.unwrap();
        assert_eq!(text, "BEGIN:VEVENT\r\nEND:VEVENT\r\n");
    }
}
