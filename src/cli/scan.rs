//! Scan command implementation.
//!
//! Builds the scan configuration from parsed flags, runs the scan with
//! Ctrl-C wired to cancellation, and renders the report.

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;
use crate::output;
use crate::scanner::{ScanCoordinator, TcpProber};
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Execute a scan as described by `cli`.
///
/// Every configuration error is returned before a socket is opened.
pub async fn execute(cli: &Cli) -> CliResult<()> {
    let config = cli.scan_config()?;
    debug!(
        host = config.host(),
        ports = config.ports().len(),
        workers = config.workers(),
        report_closed = config.report_closed(),
        "scan configuration"
    );

    let plain = cli.output == OutputFormat::Plain;
    if !cli.quiet && plain {
        output::print_scan_header(
            config.host(),
            config.ports().len(),
            config.workers(),
            config.timeout(),
        );
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling scan");
            ctrl_c.cancel();
        }
    });

    let prober = TcpProber::new(config.host(), config.timeout());
    let mut coordinator = ScanCoordinator::new(config, prober).with_cancellation(cancel);

    let progress = if cli.verbose {
        let pb = ProgressBar::new(coordinator.config().ports().len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        coordinator = coordinator.with_progress(pb.clone());
        Some(pb)
    } else {
        None
    };

    let report = coordinator.run().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if report.cancelled && plain {
        output::print_warning("Scan cancelled; results are partial.");
    }

    output::print_report(&report, cli.output)?;
    Ok(())
}
