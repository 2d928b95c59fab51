// checkledger - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Diagnostic logging initialisation (debug mode support)
// 3. Config loading and platform path resolution
// 4. Command dispatch: checklist CRUD and log export

use checkledger::app::audit::AuditLog;
use checkledger::app::store;
use checkledger::core::export::export_log;
use checkledger::core::model::{Level, ReportFormat};
use checkledger::platform::config::{load_config, PlatformPaths};
use checkledger::util::constants;
use checkledger::util::error::{CheckledgerError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// checkledger - personal checklist manager with an audit trail.
///
/// Every action is appended to a plain-text activity log, and `export`
/// turns that log into a shareable Markdown, CSV, or plain-text report.
#[derive(Parser, Debug)]
#[command(name = "checkledger", version, about)]
struct Cli {
    /// Override the configuration directory.
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new checklist item.
    Add {
        /// Item text.
        text: String,
    },

    /// Show all checklist items.
    List,

    /// Mark an item complete.
    Done {
        /// Item ID as shown by `list`.
        id: u64,
    },

    /// Remove an item.
    Remove {
        /// Item ID as shown by `list`.
        id: u64,
    },

    /// Export the activity log as a report.
    Export {
        /// Report format: md, csv, or txt.
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Config has to be read before logging init so [logging] level can
    // take effect; warnings are held until tracing is up.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = load_config(&config_dir);

    checkledger::util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        eprintln!("Warning: {warning}");
    }

    let paths = PlatformPaths::resolve().with_overrides(&config);

    tracing::debug!(
        version = constants::APP_VERSION,
        command = ?cli.command,
        "checkledger starting"
    );

    if let Err(e) = run(cli.command, &paths) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, paths: &PlatformPaths) -> Result<()> {
    let audit = AuditLog::new(&paths.log_file, constants::AUDIT_SOURCE_NAME);

    match command {
        Command::Add { text } => {
            let mut checklist = store::load(&paths.data_file)?;
            let now = chrono::Local::now().naive_local();
            let item = checklist.add(text, now);
            let (id, text) = (item.id, item.text.clone());
            store::save(&checklist, &paths.data_file)?;

            record_audit(&audit, Level::Info, &format!("Added item #{id}: {text}"))?;
            println!("Added item #{id}: {text}");
        }

        Command::List => {
            let checklist = store::load(&paths.data_file)?;
            if checklist.is_empty() {
                println!("Checklist is empty.");
            } else {
                for item in checklist.items() {
                    let mark = if item.done { "x" } else { " " };
                    println!("[{mark}] #{} {}", item.id, item.text);
                }
            }
            record_audit(
                &audit,
                Level::Debug,
                &format!("Listed {} item(s)", checklist.len()),
            )?;
        }

        Command::Done { id } => {
            let mut checklist = store::load(&paths.data_file)?;
            match checklist.complete(id) {
                Some(item) => {
                    let text = item.text.clone();
                    store::save(&checklist, &paths.data_file)?;
                    record_audit(&audit, Level::Info, &format!("Completed item #{id}: {text}"))?;
                    println!("Completed item #{id}: {text}");
                }
                None => {
                    record_audit(
                        &audit,
                        Level::Warning,
                        &format!("Complete failed: no item #{id}"),
                    )?;
                    eprintln!("No item with ID {id}.");
                }
            }
        }

        Command::Remove { id } => {
            let mut checklist = store::load(&paths.data_file)?;
            match checklist.remove(id) {
                Some(item) => {
                    store::save(&checklist, &paths.data_file)?;
                    record_audit(
                        &audit,
                        Level::Info,
                        &format!("Removed item #{id}: {}", item.text),
                    )?;
                    println!("Removed item #{id}: {}", item.text);
                }
                None => {
                    record_audit(
                        &audit,
                        Level::Warning,
                        &format!("Remove failed: no item #{id}"),
                    )?;
                    eprintln!("No item with ID {id}.");
                }
            }
        }

        Command::Export { format } => {
            // Format is validated before any file is touched.
            let format = ReportFormat::parse(&format).map_err(CheckledgerError::Export)?;

            let summary = export_log(&paths.log_file, format, &paths.reports_dir)
                .map_err(CheckledgerError::Export)?;

            println!(
                "Exported {} record(s) to {}",
                summary.records_written,
                summary.report_path.display()
            );
            if summary.lines_skipped > 0 {
                println!("Skipped {} malformed line(s):", summary.lines_skipped);
                for line in &summary.skipped_lines {
                    println!("  {line}");
                }
            }

            record_audit(
                &audit,
                Level::Info,
                &format!(
                    "Exported {} record(s) as {} ({} skipped)",
                    summary.records_written, format, summary.lines_skipped
                ),
            )?;
        }
    }

    Ok(())
}

fn record_audit(audit: &AuditLog, level: Level, message: &str) -> Result<()> {
    audit
        .record(level, message)
        .map_err(|source| CheckledgerError::Audit {
            path: audit.path().to_path_buf(),
            source,
        })
}
