// checkledger - util/logging.rs
//
// Diagnostic logging (tracing) for the application itself. Distinct
// from the audit log in app/audit.rs: tracing output goes to stderr
// for the operator, the audit log is user data that gets exported.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (equivalent to RUST_LOG=debug)
//   - Config file: [logging] level = "debug"

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialise the diagnostic logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level >
/// default "info".
///
/// Safe to call more than once: only the first call installs the
/// subscriber, later calls are no-ops, so repeated initialisation never
/// duplicates output destinations.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if debug_flag {
            EnvFilter::new("debug")
        } else if let Some(level) = config_level {
            EnvFilter::new(level)
        } else {
            EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .init();

        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    });
}
