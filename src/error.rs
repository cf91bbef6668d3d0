//! Error types for portscanner.
//!
//! Uses `thiserror` for ergonomic error definitions. Per-probe network
//! failures are deliberately absent: a probe that cannot connect simply
//! produces no result.

use crate::types::PortError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while building a [`ScanConfig`](crate::config::ScanConfig).
///
/// All of these are fatal and are reported before any socket is opened.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("target host must not be empty")]
    MissingHost,

    #[error("timeout must be greater than zero (got {0:?})")]
    InvalidTimeout(Duration),

    #[error("worker count must be between 1 and 2^61 - 1 (got {0})")]
    InvalidWorkers(usize),

    #[error("invalid port specification: {0}")]
    Ports(#[from] PortError),

    #[error("either --ports or --all must be specified")]
    NoPorts,
}

/// Errors that abort a running scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scan worker failed: {0}")]
    WorkerFailed(#[from] tokio::task::JoinError),
}

/// Top-level error type for the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PortError> for CliError {
    fn from(err: PortError) -> Self {
        Self::Config(ConfigError::Ports(err))
    }
}

/// Result type alias for configuration building.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
