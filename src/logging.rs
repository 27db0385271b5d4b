//! # Event Logging
//!
//! The repository client reports each outcome through the [`EventLog`] trait,
//! which it receives at construction instead of reaching for global state.
//! [`LogFacade`] is the implementation used by the command-line tool; it
//! forwards to the `log` crate, so whichever logger the binary installs
//! receives the entries. Tests supply their own `EventLog` to capture them.
//!
//! [`init_file_logger`] installs `env_logger` with an append-only file target
//! and the one-line format `<timestamp> - <LEVEL> - <message>`.
//!
//! Timestamps are UTC at one-second resolution, the same clock the commit
//! provenance suffix uses. The line carries no zone marker.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter};

use crate::error::{Error, Result};

/// Destination for the client's outcome messages.
pub trait EventLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl EventLog for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Formats one log line.
pub fn format_line(timestamp: DateTime<Utc>, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        level,
        message
    )
}

/// Installs the process-wide logger, appending to `path`.
///
/// Records from this crate are kept at `level`; other crates (the HTTP stack)
/// only contribute warnings and errors.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = open_append(path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn.min(level))
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(Utc::now(), record.level(), &record.args().to_string())
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| Error::Config {
            message: format!("failed to initialize logging: {e}"),
        })
}

/// Opens `path` for appending, creating it if needed.
fn open_append(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            format_line(timestamp, Level::Info, "Successfully read file: README.md"),
            "2024-03-09 07:05:01 - INFO - Successfully read file: README.md"
        );
    }

    #[test]
    fn test_format_line_error_level() {
        let timestamp = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let line = format_line(timestamp, Level::Error, "Error reading file a.txt: boom");
        assert!(line.starts_with("2024-12-31 23:59:59 - ERROR - "));
        assert!(line.ends_with("boom"));
    }

    #[test]
    fn test_open_append_keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code_assistant.log");
        std::fs::write(&path, "2024-01-01 00:00:00 - INFO - earlier\n").unwrap();

        let mut file = open_append(&path).unwrap();
        writeln!(file, "2024-01-02 00:00:00 - ERROR - later").unwrap();
        drop(file);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2024-01-01 00:00:00 - INFO - earlier\n2024-01-02 00:00:00 - ERROR - later\n"
        );
    }

    #[test]
    fn test_open_append_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.log");

        open_append(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_log_facade_forwards_levels() {
        testing_logger::setup();

        let log = LogFacade;
        log.info("Created branch: feature");
        log.error("Error creating PR: Validation error");

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert_eq!(captured_logs[0].body, "Created branch: feature");
            assert_eq!(captured_logs[0].level, Level::Info);
            assert_eq!(captured_logs[1].body, "Error creating PR: Validation error");
            assert_eq!(captured_logs[1].level, Level::Error);
        });
    }
}
