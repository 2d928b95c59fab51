// checkledger - core/export.rs
//
// Export orchestrator: reads the audit log, parses it, renders the
// requested format, and writes a timestamped report file.
//
// The run is a stateless batch: the log file is treated as a read-once
// snapshot (the audit writer may append during the read; append-only
// growth needs no coordination), and repeating a run produces a second,
// independent report.

use crate::core::model::ReportFormat;
use crate::core::parser;
use crate::core::render;
use crate::util::constants::{MAX_PARSE_FAILURES, REPORT_FILE_PREFIX};
use crate::util::error::{ExportError, LineError};
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a successful export run.
#[derive(Debug)]
pub struct ExportSummary {
    /// Path of the report file that was written.
    pub report_path: PathBuf,

    /// Number of records rendered into the report.
    pub records_written: usize,

    /// Number of malformed lines excluded from the report.
    pub lines_skipped: usize,

    /// Details for the excluded lines (capped; see `MAX_PARSE_FAILURES`).
    pub skipped_lines: Vec<LineError>,
}

/// Export the audit log at `log_path` as `format` into `reports_dir`.
///
/// File-level problems (missing source, unwritable destination) abort
/// the run with nothing written; malformed lines are recovered per line
/// and reported in the summary. The report is written atomically via a
/// sibling temp file, so a failed run never leaves a partial report.
pub fn export_log(
    log_path: &Path,
    format: ReportFormat,
    reports_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    export_log_at(log_path, format, reports_dir, Local::now())
}

/// `export_log` with an explicit wall-clock time for the report name.
/// Split out so tests can pin the filename.
pub fn export_log_at(
    log_path: &Path,
    format: ReportFormat,
    reports_dir: &Path,
    now: DateTime<Local>,
) -> Result<ExportSummary, ExportError> {
    let content = match std::fs::read_to_string(log_path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ExportError::MissingSource {
                path: log_path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(ExportError::Read {
                path: log_path.to_path_buf(),
                source: e,
            });
        }
    };

    let outcome = parser::parse_content(&content, MAX_PARSE_FAILURES);

    std::fs::create_dir_all(reports_dir).map_err(|source| ExportError::Write {
        path: reports_dir.to_path_buf(),
        source,
    })?;

    let report_path = next_report_path(reports_dir, format, now);

    // Render into memory first, then write temp + rename, so the final
    // path only ever holds a complete report.
    let mut buffer: Vec<u8> = Vec::new();
    let records_written = render::render(format, &outcome.records, &mut buffer, &report_path)?;

    write_atomic(&report_path, &buffer)?;

    tracing::info!(
        report = %report_path.display(),
        format = %format,
        records = records_written,
        skipped = outcome.failure_count,
        "Report exported"
    );

    Ok(ExportSummary {
        report_path,
        records_written,
        lines_skipped: outcome.failure_count,
        skipped_lines: outcome.failures,
    })
}

/// Compute `report_<YYYYMMDD_HHMMSS>.<ext>`, suffixing a counter when a
/// prior export in the same second already claimed the name.
fn next_report_path(reports_dir: &Path, format: ReportFormat, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format("%Y%m%d_%H%M%S");
    let base = format!("{REPORT_FILE_PREFIX}{stamp}");
    let ext = format.extension();

    let candidate = reports_dir.join(format!("{base}.{ext}"));
    if !candidate.exists() {
        return candidate;
    }
    let mut counter = 1u32;
    loop {
        let candidate = reports_dir.join(format!("{base}_{counter}.{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Write `bytes` to `path` via a sibling temp file and rename.
///
/// A crash or I/O failure between write and rename leaves no file at
/// the final path (rename is atomic on all supported platforms).
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let tmp = path.with_extension("tmp");

    std::fs::write(&tmp, bytes).map_err(|source| ExportError::Write {
        path: tmp.clone(),
        source,
    })?;

    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        ExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    const SAMPLE_LOG: &str = "\
2024-01-15 09:30:00 | INFO     | checklist_day4 | Added item: Buy milk
2024-01-15 09:31:12 | WARNING  | checklist_day4 | Item already complete
not a log line
2024-01-15 09:32:45 | ERROR    | storage | Save failed: disk | full
";

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("activity.log");
        std::fs::write(&path, SAMPLE_LOG).unwrap();
        path
    }

    #[test]
    fn test_export_markdown_summary_and_naming() {
        let dir = TempDir::new().unwrap();
        let log = write_sample(&dir);
        let reports = dir.path().join("reports");

        let summary =
            export_log_at(&log, ReportFormat::Markdown, &reports, fixed_now()).unwrap();

        assert_eq!(summary.records_written, 3);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(summary.skipped_lines[0].line_number, 3);
        assert_eq!(
            summary.report_path.file_name().unwrap().to_str().unwrap(),
            "report_20240115_100000.md"
        );

        let written = std::fs::read_to_string(&summary.report_path).unwrap();
        assert!(written.contains("disk \\| full"));
    }

    #[test]
    fn test_export_creates_reports_dir() {
        let dir = TempDir::new().unwrap();
        let log = write_sample(&dir);
        let reports = dir.path().join("nested").join("reports");

        let summary = export_log(&log, ReportFormat::Csv, &reports).unwrap();
        assert!(summary.report_path.exists());
        assert!(reports.is_dir());
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let reports = dir.path().join("reports");

        let result = export_log(
            &dir.path().join("no_such.log"),
            ReportFormat::PlainText,
            &reports,
        );

        assert!(matches!(result, Err(ExportError::MissingSource { .. })));
        assert!(!reports.exists(), "no output directory or file on abort");
    }

    #[test]
    fn test_same_second_exports_do_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let log = write_sample(&dir);
        let reports = dir.path().join("reports");
        let now = fixed_now();

        let first = export_log_at(&log, ReportFormat::PlainText, &reports, now).unwrap();
        let second = export_log_at(&log, ReportFormat::PlainText, &reports, now).unwrap();

        assert_ne!(first.report_path, second.report_path);
        assert!(first.report_path.exists());
        assert!(second.report_path.exists());
        assert_eq!(
            std::fs::read_to_string(&first.report_path).unwrap(),
            std::fs::read_to_string(&second.report_path).unwrap(),
            "repeat runs over the same input are content-identical"
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let log = write_sample(&dir);
        let reports = dir.path().join("reports");

        export_log_at(&log, ReportFormat::Csv, &reports, fixed_now()).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(&reports)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_empty_log_file_exports_empty_report() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("activity.log");
        std::fs::write(&log, "").unwrap();

        let summary = export_log(&log, ReportFormat::Csv, &dir.path().join("reports")).unwrap();
        assert_eq!(summary.records_written, 0);
        assert_eq!(summary.lines_skipped, 0);
    }
}
