//! # portscanner - A Concurrent TCP Port Scanner
//!
//! Probes a single host over TCP and reports which ports accept a
//! connection within a per-probe deadline, labelled with their likely
//! service.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portscanner::config::ScanConfig;
//! use portscanner::scanner::{ScanCoordinator, TcpProber};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ScanConfig::builder("192.168.1.1")
//!         .ports("22,80,8000-8010".parse().unwrap())
//!         .timeout(Duration::from_secs(1))
//!         .workers(100)
//!         .build()
//!         .unwrap();
//!
//!     let prober = TcpProber::new(config.host(), config.timeout());
//!     let report = ScanCoordinator::new(config, prober).run().await.unwrap();
//!
//!     for result in &report.results {
//!         println!("{} {} {}", result.port, result.state, result.service);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port specification parsing
//! - [`config`] - Immutable scan configuration
//! - [`scanner`] - Prober trait, TCP prober, worker-pool coordinator and aggregation
//! - [`services`] - Well-known port labels
//! - [`error`] - Error types
//! - [`cli`] / [`output`] - Command-line front end and report rendering

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{CliError, ConfigError, ScanError};
pub use scanner::{PortState, Prober, ScanCoordinator, ScanReport, ScanResult};
pub use types::{PortError, PortSpec};
