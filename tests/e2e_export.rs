// checkledger - tests/e2e_export.rs
//
// End-to-end tests for the export pipeline: real log files on disk,
// real parsing, real report files written through the orchestrator -
// no mocks, no stubs. This exercises the full path from raw audit-log
// text to a finished report in each supported format.

use checkledger::core::export::{export_log, export_log_at};
use checkledger::core::model::{Level, ReportFormat};
use checkledger::core::parser::{parse_content, parse_line};
use checkledger::util::constants::MAX_PARSE_FAILURES;
use checkledger::util::error::ExportError;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// The fixture has 9 lines: 8 well-formed, 1 malformed.
const FIXTURE_RECORDS: usize = 8;
const FIXTURE_MALFORMED: usize = 1;

// =============================================================================
// Parsing E2E
// =============================================================================

/// Counting property: N well-formed + M malformed lines yield exactly
/// N records and a skipped count of M.
#[test]
fn e2e_fixture_counts() {
    let content = fs::read_to_string(fixture("activity_sample.log")).unwrap();
    let outcome = parse_content(&content, MAX_PARSE_FAILURES);

    assert_eq!(outcome.records.len(), FIXTURE_RECORDS);
    assert_eq!(outcome.failure_count, FIXTURE_MALFORMED);
    assert_eq!(outcome.failures[0].line_number, 6);
}

/// The canonical audit line parses field-for-field.
#[test]
fn e2e_canonical_line_fields() {
    let record =
        parse_line("2024-01-15 09:30:00 | INFO     | checklist_day4 | Added item: Buy milk")
            .unwrap();
    assert_eq!(record.timestamp_str(), "2024-01-15 09:30:00");
    assert_eq!(record.level, Level::Info);
    assert_eq!(record.source, "checklist_day4");
    assert_eq!(record.message, "Added item: Buy milk");
}

/// Records come out in source order, and every level in the fixture is
/// represented.
#[test]
fn e2e_fixture_order_and_levels() {
    let content = fs::read_to_string(fixture("activity_sample.log")).unwrap();
    let outcome = parse_content(&content, MAX_PARSE_FAILURES);

    let first_messages: Vec<_> = outcome
        .records
        .iter()
        .take(2)
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(
        first_messages,
        vec!["Added item: Buy milk", "Added item: Walk dog"]
    );

    for level in Level::all() {
        assert!(
            outcome.records.iter().any(|r| r.level == *level),
            "fixture should contain a {level} record"
        );
    }
}

// =============================================================================
// Export E2E
// =============================================================================

/// Full pipeline to every format; each run reports the same counts and
/// an output file exists with the right extension.
#[test]
fn e2e_export_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let reports = dir.path().join("reports");

    for format in [ReportFormat::Markdown, ReportFormat::Csv, ReportFormat::PlainText] {
        let summary = export_log(&fixture("activity_sample.log"), format, &reports)
            .unwrap_or_else(|e| panic!("{format} export failed: {e}"));

        assert_eq!(summary.records_written, FIXTURE_RECORDS);
        assert_eq!(summary.lines_skipped, FIXTURE_MALFORMED);
        assert!(summary.report_path.exists());
        assert_eq!(
            summary.report_path.extension().unwrap().to_str().unwrap(),
            format.extension()
        );
    }
}

/// Markdown output survives a message containing a literal pipe: every
/// data row still reparses to exactly four columns.
#[test]
fn e2e_markdown_table_integrity() {
    let dir = tempfile::tempdir().unwrap();
    let summary = export_log_at(
        &fixture("activity_sample.log"),
        ReportFormat::Markdown,
        dir.path(),
        fixed_now(),
    )
    .unwrap();

    let content = fs::read_to_string(&summary.report_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2 + FIXTURE_RECORDS);

    for row in &lines[2..] {
        let cells = row.replace("\\|", "\u{0}");
        let columns: Vec<_> = cells.trim_matches('|').split('|').collect();
        assert_eq!(columns.len(), 4, "row broke the table: {row}");
    }

    // The pipe-bearing message is escaped, not truncated.
    assert!(content.contains("Removed item #1: Walk dog \\| urgent"));
}

/// CSV output decodes back to the original message text through a
/// standard CSV reader, including the comma-and-quote case.
#[test]
fn e2e_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let summary = export_log_at(
        &fixture("activity_sample.log"),
        ReportFormat::Csv,
        dir.path(),
        fixed_now(),
    )
    .unwrap();

    let content = fs::read_to_string(&summary.report_path).unwrap();
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["timestamp", "level", "source", "message"])
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), FIXTURE_RECORDS);
    assert!(
        rows.iter()
            .any(|r| &r[3] == "Save failed: Item \"A\" cost, a lot"),
        "quoted message should decode verbatim"
    );
}

/// Plain-text layout matches `[<timestamp>] <LEVEL>: <message> (source: <source>)`.
#[test]
fn e2e_plain_text_layout() {
    let dir = tempfile::tempdir().unwrap();
    let summary = export_log_at(
        &fixture("activity_sample.log"),
        ReportFormat::PlainText,
        dir.path(),
        fixed_now(),
    )
    .unwrap();

    let content = fs::read_to_string(&summary.report_path).unwrap();
    let first = content.lines().next().unwrap();
    assert_eq!(
        first,
        "[2024-01-15 09:30:00] INFO: Added item: Buy milk (source: checklist_day4)"
    );
    assert_eq!(content.lines().count(), FIXTURE_RECORDS);
}

// =============================================================================
// Error taxonomy E2E
// =============================================================================

/// Exporting a nonexistent log yields MissingSource and writes nothing.
#[test]
fn e2e_missing_source_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let reports = dir.path().join("reports");

    let result = export_log(
        &dir.path().join("does_not_exist.log"),
        ReportFormat::Markdown,
        &reports,
    );

    assert!(matches!(result, Err(ExportError::MissingSource { .. })));
    assert!(!reports.exists());
}

/// Requesting format `pdf` is rejected before any file I/O.
#[test]
fn e2e_unsupported_format_creates_no_output() {
    let err = ReportFormat::parse("pdf").unwrap_err();
    assert!(matches!(
        err,
        ExportError::UnsupportedFormat { ref requested } if requested == "pdf"
    ));
    assert!(err.to_string().contains("md, csv, txt"));
}

/// A reports path that cannot become a directory surfaces a Write
/// error and leaves no report behind.
#[test]
fn e2e_uncreatable_reports_dir_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file squats on the reports path, so create_dir_all fails.
    let reports = dir.path().join("reports");
    fs::write(&reports, "in the way").unwrap();

    let result = export_log(
        &fixture("activity_sample.log"),
        ReportFormat::PlainText,
        &reports,
    );

    assert!(matches!(result, Err(ExportError::Write { .. })));
    assert_eq!(fs::read_to_string(&reports).unwrap(), "in the way");
}
