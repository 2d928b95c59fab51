// checkledger - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries the path or
// value that failed so messages are actionable without a debugger.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all checkledger operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CheckledgerError {
    /// Log export failed.
    Export(ExportError),

    /// Checklist persistence failed.
    Store(StoreError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Audit log could not be written.
    Audit { path: PathBuf, source: io::Error },
}

impl fmt::Display for CheckledgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Store(e) => write!(f, "Checklist storage error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Audit { path, source } => write!(
                f,
                "Cannot write audit log '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CheckledgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Audit { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors that abort an export run. Per-line parse problems are not
/// errors at this level; they are recovered and counted in the summary.
#[derive(Debug)]
pub enum ExportError {
    /// The source log file does not exist. Nothing is written.
    MissingSource { path: PathBuf },

    /// The requested format is not one of md, csv, txt.
    /// Rejected before any file is created.
    UnsupportedFormat { requested: String },

    /// The source log file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The report directory or file could not be created or written.
    /// The report path is either fully written or absent, never partial.
    Write { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource { path } => {
                write!(
                    f,
                    "Log file '{}' does not exist - nothing to export",
                    path.display()
                )
            }
            Self::UnsupportedFormat { requested } => {
                write!(
                    f,
                    "Unsupported report format '{requested}'. Valid formats: md, csv, txt"
                )
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read log file '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write report '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for CheckledgerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Per-line parse failures (non-fatal)
// ---------------------------------------------------------------------------

/// One malformed log line, excluded from the report.
///
/// Not an `Error` in the abort sense: these are aggregated into the
/// export summary and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the source log file.
    pub line_number: u64,

    /// Why the line was rejected.
    pub reason: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to checklist JSON persistence.
#[derive(Debug)]
pub enum StoreError {
    /// The checklist file exists but is not valid JSON for the current
    /// schema. Surfaced rather than silently discarding user data.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The stored file carries an incompatible schema version.
    VersionMismatch { path: PathBuf, found: u32, expected: u32 },

    /// I/O error reading or writing the checklist file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { path, source } => {
                write!(
                    f,
                    "Checklist file '{}' is malformed: {source}",
                    path.display()
                )
            }
            Self::VersionMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "Checklist file '{}' has schema version {found}, expected {expected}",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Checklist I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for CheckledgerError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for CheckledgerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for checkledger results.
pub type Result<T> = std::result::Result<T, CheckledgerError>;
