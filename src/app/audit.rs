// checkledger - app/audit.rs
//
// Audit trail writer: appends one pipe-delimited line per user action
// to the activity log. This is the write side of the format that
// core/parser.rs reads back.
//
// An explicit value constructed at startup and passed by reference -
// there is no process-global logger to configure, so constructing a
// second `AuditLog` for the same file cannot duplicate destinations.
// Rotation of the log file is an external concern; this writer only
// appends to whatever file currently exists.

use crate::core::model::{Level, TIMESTAMP_FORMAT};
use crate::core::parser::FIELD_DELIMITER;
use crate::util::constants::LEVEL_COLUMN_WIDTH;
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends audit lines to a log file on behalf of one source name.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
    source: String,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The log file this writer appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one audit line stamped with the current local time.
    pub fn record(&self, level: Level, message: &str) -> std::io::Result<()> {
        self.record_at(level, message, Local::now().naive_local())
    }

    /// `record` with an explicit timestamp, for tests.
    pub fn record_at(
        &self,
        level: Level,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Level padded for column alignment; the parser trims it back.
        let line = format!(
            "{ts}{d}{level:<width$}{d}{source}{d}{message}\n",
            ts = timestamp.format(TIMESTAMP_FORMAT),
            d = FIELD_DELIMITER,
            level = level.as_str(),
            width = LEVEL_COLUMN_WIDTH,
            source = self.source,
        );

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}
