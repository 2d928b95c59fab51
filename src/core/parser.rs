// checkledger - core/parser.rs
//
// Parses audit-log text back into structured LogRecords.
// Core layer: accepts string content, never touches the filesystem.
//
// Line shape:  YYYY-MM-DD HH:MM:SS | LEVEL    | source | message
// The message is everything after the third delimiter and may itself
// contain " | ", so the split is capped at four fields.

use crate::core::model::{Level, LogRecord, TIMESTAMP_FORMAT};
use crate::util::error::LineError;
use chrono::NaiveDateTime;

/// Field delimiter between the four columns of a log line.
pub const FIELD_DELIMITER: &str = " | ";

/// Result of parsing a complete log file's content.
#[derive(Debug)]
pub struct ParseOutcome {
    /// Successfully parsed records, in source-line order.
    pub records: Vec<LogRecord>,
    /// Malformed lines that were excluded (capped at `MAX_PARSE_FAILURES`).
    pub failures: Vec<LineError>,
    /// Total malformed lines, including any beyond the cap.
    pub failure_count: usize,
}

/// Parse one log line (without its trailing newline) into a `LogRecord`.
///
/// Structural mismatch is a per-line error, never a panic: fewer than
/// four fields, a level name outside the known set, or a timestamp that
/// does not match the audit format all reject the line with a reason.
pub fn parse_line(line: &str) -> Result<LogRecord, String> {
    let mut fields = line.splitn(4, FIELD_DELIMITER);

    let raw_timestamp = fields.next().unwrap_or_default();
    let raw_level = fields
        .next()
        .ok_or_else(|| "expected 4 fields, found 1".to_string())?;
    let raw_source = fields
        .next()
        .ok_or_else(|| "expected 4 fields, found 2".to_string())?;
    let message = fields
        .next()
        .ok_or_else(|| "expected 4 fields, found 3".to_string())?;

    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| format!("bad timestamp '{raw_timestamp}': {e}"))?;

    // Level columns are space-padded for alignment; trim before the
    // exact, case-sensitive match.
    let level_name = raw_level.trim();
    let level = Level::from_name(level_name)
        .ok_or_else(|| format!("unknown level '{level_name}'"))?;

    Ok(LogRecord {
        timestamp,
        level,
        source: raw_source.trim().to_string(),
        message: message.to_string(),
    })
}

/// Parse whole-file content into ordered records plus failure details.
///
/// Empty and whitespace-only lines are skipped silently (not counted as
/// failures). Record order always matches source-line order: the audit
/// log is chronological and a report must not reorder it. Failures past
/// the tracking cap are still counted in `failure_count`.
pub fn parse_content(content: &str, max_failures: usize) -> ParseOutcome {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut failure_count = 0usize;

    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                failure_count += 1;
                if failures.len() < max_failures {
                    failures.push(LineError {
                        line_number: (line_idx as u64) + 1,
                        reason,
                    });
                }
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        failures = failure_count,
        "Log content parsed"
    );

    ParseOutcome {
        records,
        failures,
        failure_count,
    }
}
