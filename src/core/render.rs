// checkledger - core/render.rs
//
// Report renderers: Markdown table, CSV, and plain text.
// Core layer: writes to any Write trait object; the orchestrator in
// core/export.rs decides where the bytes land.
//
// All three renderers preserve record order and return the number of
// records written. Message content is carried verbatim except for the
// escaping each format requires.

use crate::core::model::{LogRecord, ReportFormat};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Render `records` in `format` to `writer`.
pub fn render<W: Write>(
    format: ReportFormat,
    records: &[LogRecord],
    writer: W,
    report_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        ReportFormat::Markdown => render_markdown(records, writer, report_path),
        ReportFormat::Csv => render_csv(records, writer, report_path),
        ReportFormat::PlainText => render_plain(records, writer, report_path),
    }
}

/// Escape literal pipes so a cell cannot break the table structure.
fn escape_markdown_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Markdown table: header row, separator row, one row per record.
pub fn render_markdown<W: Write>(
    records: &[LogRecord],
    mut writer: W,
    report_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |source| ExportError::Write {
        path: report_path.to_path_buf(),
        source,
    };

    writeln!(writer, "| Timestamp | Level | Source | Message |").map_err(io_err)?;
    writeln!(writer, "| --- | --- | --- | --- |").map_err(io_err)?;

    for record in records {
        writeln!(
            writer,
            "| {} | {} | {} | {} |",
            record.timestamp_str(),
            record.level,
            escape_markdown_cell(&record.source),
            escape_markdown_cell(&record.message),
        )
        .map_err(io_err)?;
    }

    Ok(records.len())
}

/// CSV with header `timestamp,level,source,message`.
///
/// The csv crate handles quoting: fields containing a comma, quote, or
/// newline are quoted and internal quotes doubled, so any message text
/// survives a round-trip through a standard CSV reader.
pub fn render_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    report_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["timestamp", "level", "source", "message"])
        .map_err(|e| ExportError::Csv {
            path: report_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                record.timestamp_str().as_str(),
                record.level.as_str(),
                &record.source,
                &record.message,
            ])
            .map_err(|e| ExportError::Csv {
                path: report_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Write {
        path: report_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Plain text: `[<timestamp>] <LEVEL>: <message> (source: <source>)`.
pub fn render_plain<W: Write>(
    records: &[LogRecord],
    mut writer: W,
    report_path: &Path,
) -> Result<usize, ExportError> {
    for record in records {
        writeln!(
            writer,
            "[{}] {}: {} (source: {})",
            record.timestamp_str(),
            record.level,
            record.message,
            record.source,
        )
        .map_err(|source| ExportError::Write {
            path: report_path.to_path_buf(),
            source,
        })?;
    }

    Ok(records.len())
}
