//! Immutable scan parameters.
//!
//! A [`ScanConfig`] is built once through [`ScanConfigBuilder`], validated,
//! and then shared read-only by every worker of a scan.

use crate::error::{ConfigError, ConfigResult};
use crate::types::PortSpec;
use std::time::Duration;

/// Default per-probe timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default worker pool size.
pub const DEFAULT_WORKERS: usize = 1000;

/// Largest accepted worker pool size; tokio's bounded channels cannot hold
/// more permits than this.
pub const MAX_WORKERS: usize = usize::MAX >> 3;

/// Validated configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    host: String,
    timeout: Duration,
    workers: usize,
    ports: PortSpec,
    report_closed: bool,
}

impl ScanConfig {
    /// Start building a configuration for `host`.
    pub fn builder(host: impl Into<String>) -> ScanConfigBuilder {
        ScanConfigBuilder::new(host)
    }

    /// Target host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Connect deadline applied to every probe.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of concurrent workers (W).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Ports to submit, in order.
    pub fn ports(&self) -> &PortSpec {
        &self.ports
    }

    /// Whether refused and filtered ports are reported alongside open ones.
    pub fn report_closed(&self) -> bool {
        self.report_closed
    }
}

/// Builder for [`ScanConfig`].
#[derive(Debug, Clone)]
pub struct ScanConfigBuilder {
    host: String,
    timeout: Duration,
    workers: usize,
    ports: PortSpec,
    report_closed: bool,
}

impl ScanConfigBuilder {
    fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout: DEFAULT_TIMEOUT,
            workers: DEFAULT_WORKERS,
            ports: PortSpec::new(),
            report_closed: false,
        }
    }

    /// Set the per-probe timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker pool size.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the ports to scan.
    pub fn ports(mut self, ports: PortSpec) -> Self {
        self.ports = ports;
        self
    }

    /// Report closed and filtered ports too.
    pub fn report_closed(mut self, enabled: bool) -> Self {
        self.report_closed = enabled;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// An empty port list is accepted here; whether that is an error is up
    /// to the caller.
    pub fn build(self) -> ConfigResult<ScanConfig> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(self.timeout));
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkers(self.workers));
        }

        Ok(ScanConfig {
            host: host.to_string(),
            timeout: self.timeout,
            workers: self.workers,
            ports: self.ports,
            report_closed: self.report_closed,
        })
    }
}
