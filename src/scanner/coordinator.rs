//! Worker-pool scan coordinator.
//!
//! A scan runs W long-lived workers (never more than there are jobs) that
//! pull ports from a bounded job channel of the same capacity and push
//! results into an unbounded result channel.
//! A distributor task feeds the job channel in [`PortSpec`] order and closes
//! it when every port has been submitted, so a full channel applies
//! backpressure to the distributor rather than buffering the whole spec.
//!
//! The result channel is drained only after every worker has been joined.
//! That barrier is what guarantees the report is never built from a partial
//! set of results.
//!
//! [`PortSpec`]: crate::types::PortSpec

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scanner::aggregator::{ResultAggregator, ScanReport};
use crate::scanner::traits::{Prober, ScanResult};
use indicatif::ProgressBar;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

type JobReceiver = Arc<Mutex<mpsc::Receiver<u16>>>;

/// Runs one scan of a [`ScanConfig`] using a [`Prober`].
pub struct ScanCoordinator<P> {
    config: Arc<ScanConfig>,
    prober: Arc<P>,
    cancel: CancellationToken,
    progress: Option<ProgressBar>,
}

impl<P: Prober + 'static> ScanCoordinator<P> {
    pub fn new(config: ScanConfig, prober: P) -> Self {
        Self {
            config: Arc::new(config),
            prober: Arc::new(prober),
            cancel: CancellationToken::new(),
            progress: None,
        }
    }

    /// Stop submitting jobs and abandon in-flight probes once `token` fires.
    ///
    /// The report of a cancelled scan has `cancelled` set.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Tick `progress` once per attempted port.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Execute every job and aggregate the results.
    pub async fn run(self) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let total = self.config.ports().len();
        // Workers beyond the job count would only sit idle.
        let workers = self.config.workers().min(total);

        info!(
            host = self.config.host(),
            ports = total,
            workers,
            timeout_ms = self.config.timeout().as_millis() as u64,
            "starting scan"
        );

        let (job_tx, job_rx) = mpsc::channel::<u16>(workers.max(1));
        let job_rx: JobReceiver = Arc::new(Mutex::new(job_rx));
        let (result_tx, result_rx) = mpsc::unbounded_channel::<ScanResult>();
        let attempted = Arc::new(AtomicUsize::new(0));

        let mut pool = JoinSet::new();
        for id in 0..workers {
            pool.spawn(worker(
                id,
                Arc::clone(&job_rx),
                result_tx.clone(),
                Arc::clone(&self.prober),
                self.config.report_closed(),
                self.cancel.clone(),
                Arc::clone(&attempted),
                self.progress.clone(),
            ));
        }
        // Workers hold the only remaining handles.
        drop(job_rx);
        drop(result_tx);

        let distributor = tokio::spawn(distribute(
            Arc::clone(&self.config),
            job_tx,
            self.cancel.clone(),
        ));

        // Join barrier: every worker must finish before results are read.
        while let Some(joined) = pool.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "scan worker failed, aborting scan");
                pool.abort_all();
                distributor.abort();
                return Err(ScanError::WorkerFailed(e));
            }
        }
        let submitted = distributor.await?;

        // Every result is already queued once the barrier has passed.
        let mut aggregator = ResultAggregator::with_capacity(result_rx.len());
        aggregator.drain(result_rx).await;

        let cancelled = self.cancel.is_cancelled();
        let ports_scanned = attempted.load(Ordering::Relaxed);
        if cancelled {
            warn!(submitted, ports_scanned, total, "scan cancelled before completion");
        }

        let report = aggregator.finish(
            self.config.host(),
            ports_scanned,
            start.elapsed(),
            cancelled,
        );
        info!(
            open = report.open_count,
            ports_scanned,
            elapsed_ms = report.elapsed_ms,
            "scan finished"
        );

        Ok(report)
    }
}

/// Push every port into the job channel, then close it by dropping `jobs`.
///
/// Returns the number of ports submitted.
async fn distribute(
    config: Arc<ScanConfig>,
    jobs: mpsc::Sender<u16>,
    cancel: CancellationToken,
) -> usize {
    let mut submitted = 0;
    for &port in config.ports().ports() {
        let sent = tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            sent = jobs.send(port) => sent.is_ok(),
        };
        if !sent {
            break;
        }
        submitted += 1;
    }
    debug!(submitted, "job submission complete");
    submitted
}

#[allow(clippy::too_many_arguments)]
async fn worker<P: Prober>(
    id: usize,
    jobs: JobReceiver,
    results: mpsc::UnboundedSender<ScanResult>,
    prober: Arc<P>,
    report_closed: bool,
    cancel: CancellationToken,
    attempted: Arc<AtomicUsize>,
    progress: Option<ProgressBar>,
) {
    loop {
        // The lock is held only while waiting for the next job.
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            port = async { jobs.lock().await.recv().await } => port,
        };
        let Some(port) = next else {
            break;
        };
        attempted.fetch_add(1, Ordering::Relaxed);

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            outcome = prober.probe(port) => Some(outcome),
        };
        let Some(outcome) = outcome else {
            break;
        };

        if let Some(result) = outcome.into_result(port, report_closed) {
            debug!(port, state = %result.state, service = %result.service, "port reported");
            if results.send(result).is_err() {
                break;
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    trace!(worker = id, "worker exiting");
}
