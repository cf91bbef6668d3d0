//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags that
//! shape a scan can also be supplied through `PORTSCANNER_*` environment
//! variables.

mod scan;

pub use scan::execute;

use crate::config::ScanConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::types::PortSpec;
use clap::Parser;
use std::time::Duration;

/// A fast port scanner.
///
/// Scans specific ports or the full 0-65535 range of a host with a fixed
/// pool of concurrent TCP connect workers and lists the open ports.
#[derive(Parser, Debug)]
#[command(name = "portscanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A fast concurrent TCP port scanner", long_about = None)]
pub struct Cli {
    /// Server IP address or hostname to scan
    #[arg(short, long, env = "PORTSCANNER_SERVER", value_name = "HOST")]
    pub server: String,

    /// Ports to scan (comma-separated, ranges allowed e.g., 80,443,8000-8010)
    #[arg(short, long, env = "PORTSCANNER_PORTS", default_value = "")]
    pub ports: String,

    /// Scan all ports (0-65535); overrides --ports
    #[arg(short, long)]
    pub all: bool,

    /// Timeout in seconds for each port probe
    #[arg(short, long, env = "PORTSCANNER_TIMEOUT", default_value = "2")]
    pub timeout: u64,

    /// Number of concurrent workers
    #[arg(short, long, env = "PORTSCANNER_WORKERS", default_value = "1000")]
    pub workers: usize,

    /// Probe each port only once even if ranges overlap
    #[arg(long)]
    pub dedup: bool,

    /// Also list closed and filtered ports
    #[arg(long)]
    pub show_closed: bool,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Enable debug logging and a progress bar
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the port list requested on the command line.
    pub fn port_spec(&self) -> ConfigResult<PortSpec> {
        let spec = if self.all {
            PortSpec::full()
        } else {
            PortSpec::parse(&self.ports)?
        };

        if spec.is_empty() {
            return Err(ConfigError::NoPorts);
        }

        Ok(if self.dedup { spec.dedup() } else { spec })
    }

    /// Build the immutable scan configuration.
    pub fn scan_config(&self) -> ConfigResult<ScanConfig> {
        ScanConfig::builder(&self.server)
            .ports(self.port_spec()?)
            .timeout(Duration::from_secs(self.timeout))
            .workers(self.workers)
            .report_closed(self.show_closed)
            .build()
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Plain,
    /// JSON structured output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
