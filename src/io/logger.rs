//! Durable event log.
//!
//! One file per game under a log directory, one timestamped line per
//! event. Lifecycle: open -> append* -> close. Append and flush
//! failures are reported through the `log` facade and swallowed; the
//! logger is an observer and must never change a round's outcome.
//! Only `open` returns an error, so the caller can degrade to
//! console-only output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::round::{EventSink, GameEvent};

/// Failure to open the log file.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Event sink that appends timestamped lines to a per-game file.
pub struct FileLogger {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileLogger {
    /// Open a new log file under `dir`, creating the directory if needed.
    ///
    /// The file is named `game_<timestamp>.txt` and starts with a
    /// header line.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| LoggerError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("game_{}.txt", file_stamp()));
        let file = File::create(&path).map_err(|source| LoggerError::CreateFile {
            path: path.clone(),
            source,
        })?;

        let mut logger = Self {
            path,
            writer: BufWriter::new(file),
        };
        logger.append("=== New Flip 7 game ===");
        Ok(logger)
    }

    /// Where this game's log lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "[{}] {line}", line_stamp()) {
            log::warn!("event log write failed: {err}");
        }
    }
}

impl EventSink for FileLogger {
    fn publish(&mut self, event: &GameEvent) {
        self.append(&event.to_string());
    }

    fn close(&mut self) {
        if let Err(err) = self.writer.flush() {
            log::warn!("event log flush failed: {err}");
        }
    }
}

/// Filesystem-safe timestamp for the file name.
fn file_stamp() -> String {
    let format =
        format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_default()
}

/// Human-readable timestamp for each log line.
fn line_stamp() -> String {
    let format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_default()
}
