// checkledger - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no CLI,
// no platform dependencies (layer rule: core depends on std, chrono,
// serde only).
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// chrono format string for audit-log timestamps, both when parsing log
/// lines and when the audit writer emits them. Rendering a parsed
/// timestamp with the same string reproduces the source text verbatim.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Log Record (structured output of parsing)
// =============================================================================

/// A single parsed audit-log entry.
///
/// This is the core data unit that flows from the line parser to the
/// report renderers. Records are transient: they exist only for the
/// duration of one export run and are never persisted themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Timestamp of the logged action (`YYYY-MM-DD HH:MM:SS`, no zone).
    pub timestamp: NaiveDateTime,

    /// Severity level of the entry.
    pub level: Level,

    /// Logger/component name that emitted the line.
    pub source: String,

    /// Free-text remainder of the line. May itself contain the field
    /// delimiter; the parser never truncates it.
    pub message: String,
}

impl LogRecord {
    /// The timestamp re-rendered in the audit-log format.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

// =============================================================================
// Level
// =============================================================================

/// Audit-log severity levels, ordered from least to most severe.
///
/// Log lines carry these as exact upper-case names (possibly padded with
/// spaces for column alignment). Matching is case-sensitive: `info` is
/// not a valid level, `INFO` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Returns all variants in severity order.
    pub fn all() -> &'static [Level] {
        &[
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ]
    }

    /// The exact name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Exact, case-sensitive lookup of a level name.
    ///
    /// The caller is expected to have trimmed alignment padding already;
    /// any other deviation from the canonical names returns `None`.
    pub fn from_name(name: &str) -> Option<Level> {
        Level::all().iter().copied().find(|l| l.as_str() == name)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Report format
// =============================================================================

/// Target format for an export run.
///
/// A closed enum rather than a format string: dispatch over it is
/// exhaustive, and an unsupported request fails at the boundary (see
/// `ReportFormat::parse`) before any file is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Csv,
    PlainText,
}

impl ReportFormat {
    /// Resolve a user-supplied format token.
    ///
    /// Accepts exactly `md`, `csv`, or `txt`; everything else is an
    /// `ExportError::UnsupportedFormat` and no output is written.
    pub fn parse(token: &str) -> Result<ReportFormat, crate::util::error::ExportError> {
        match token {
            "md" => Ok(ReportFormat::Markdown),
            "csv" => Ok(ReportFormat::Csv),
            "txt" => Ok(ReportFormat::PlainText),
            other => Err(crate::util::error::ExportError::UnsupportedFormat {
                requested: other.to_string(),
            }),
        }
    }

    /// File extension for report files in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Csv => "csv",
            ReportFormat::PlainText => "txt",
        }
    }

    /// Human-readable name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "Markdown",
            ReportFormat::Csv => "CSV",
            ReportFormat::PlainText => "plain text",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
