// checkledger - platform/config.rs
//
// Platform path resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved locations for checkledger data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/checkledger/).
    pub config_dir: PathBuf,

    /// Checklist JSON file.
    pub data_file: PathBuf,

    /// Audit log file (e.g. ~/.local/share/checkledger/logs/activity.log).
    pub log_file: PathBuf,

    /// Directory exported reports are written to.
    pub reports_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        let (config_dir, data_dir) = if let Some(proj_dirs) =
            ProjectDirs::from("", "", constants::APP_ID)
        {
            (
                proj_dirs.config_dir().to_path_buf(),
                proj_dirs.data_dir().to_path_buf(),
            )
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            (PathBuf::from("."), PathBuf::from("."))
        };

        let paths = Self {
            config_dir,
            data_file: data_dir.join(constants::CHECKLIST_FILE_NAME),
            log_file: data_dir
                .join(constants::LOG_DIR_NAME)
                .join(constants::AUDIT_LOG_FILE_NAME),
            reports_dir: data_dir.join(constants::REPORTS_DIR_NAME),
        };

        tracing::debug!(
            config = %paths.config_dir.display(),
            data = %paths.data_file.display(),
            log = %paths.log_file.display(),
            reports = %paths.reports_dir.display(),
            "Platform paths resolved"
        );

        paths
    }

    /// Apply `[paths]` overrides from the config file.
    pub fn with_overrides(mut self, config: &AppConfig) -> Self {
        if let Some(ref log_file) = config.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(ref reports_dir) = config.reports_dir {
            self.reports_dir = reports_dir.clone();
        }
        if let Some(ref data_file) = config.data_file {
            self.data_file = data_file.clone();
        }
        self
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility - a
/// newer config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Audit log file to read actions from and export.
    pub log_file: Option<String>,
    /// Directory to write reports into.
    pub reports_dir: Option<String>,
    /// Checklist JSON file.
    pub data_file: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Diagnostic level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to
/// defaults; the application always starts.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Audit log file override.
    pub log_file: Option<PathBuf>,

    /// Reports directory override.
    pub reports_dir: Option<PathBuf>,

    /// Checklist file override.
    pub data_file: Option<PathBuf>,

    /// Diagnostic logging level (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns the validated config plus a list of non-fatal warnings.
/// A missing file is a normal first run: defaults, no warnings.
/// An unparseable file falls back to defaults with a warning - the
/// user is informed but not blocked.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Paths: non-empty strings only --
    for (field, value, slot) in [
        ("log_file", &raw.paths.log_file, &mut config.log_file),
        ("reports_dir", &raw.paths.reports_dir, &mut config.reports_dir),
        ("data_file", &raw.paths.data_file, &mut config.data_file),
    ] {
        if let Some(s) = value {
            if s.trim().is_empty() {
                warnings.push(format!("[paths] {field} is empty. Using the default path."));
            } else {
                *slot = Some(PathBuf::from(s));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
