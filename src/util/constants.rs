// checkledger - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "checkledger";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "checkledger";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// File names
// =============================================================================

/// Configuration file name (platform config directory).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Checklist persistence file name (platform data directory).
pub const CHECKLIST_FILE_NAME: &str = "checklist.json";

/// Audit log file name, under `LOG_DIR_NAME`.
pub const AUDIT_LOG_FILE_NAME: &str = "activity.log";

/// Subdirectory of the data directory holding the audit log.
pub const LOG_DIR_NAME: &str = "logs";

/// Subdirectory of the data directory where reports are written.
pub const REPORTS_DIR_NAME: &str = "reports";

/// Prefix of exported report file names; the wall-clock stamp and
/// format extension complete the name.
pub const REPORT_FILE_PREFIX: &str = "report_";

// =============================================================================
// Audit log format
// =============================================================================

/// Source name the checklist application writes into its audit lines.
pub const AUDIT_SOURCE_NAME: &str = "checkledger";

/// Width the level column is padded to, keeping raw log files readable.
/// "CRITICAL" is 8 characters, so 8 keeps every level flush.
pub const LEVEL_COLUMN_WIDTH: usize = 8;

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum number of malformed lines tracked in detail per export run.
/// Lines beyond the cap are still counted, just not itemised, so one
/// corrupt log cannot balloon the summary.
pub const MAX_PARSE_FAILURES: usize = 1_000;

// =============================================================================
// Logging
// =============================================================================

/// Default diagnostic log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
