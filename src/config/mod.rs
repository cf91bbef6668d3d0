//! Scan configuration.
//!
//! Replaces process-wide flag state with a single immutable value that is
//! constructed before a scan and passed into the coordinator.

mod settings;

pub use settings::{ScanConfig, ScanConfigBuilder, DEFAULT_TIMEOUT, DEFAULT_WORKERS, MAX_WORKERS};
