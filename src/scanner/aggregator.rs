//! Result aggregation.
//!
//! Drains the result stream after the worker pool has finished and turns it
//! into a sorted, read-only [`ScanReport`].

use crate::scanner::traits::{PortState, ScanResult};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Final output of a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub host: String,
    /// Number of jobs workers actually attempted.
    pub ports_scanned: usize,
    pub open_count: usize,
    pub elapsed_ms: u64,
    /// Set when a cancellation signal cut the scan short.
    pub cancelled: bool,
    /// Sorted by port, ascending.
    pub results: Vec<ScanResult>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Collects results and builds the report.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Vec<ScanResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for an expected number of results.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: ScanResult) {
        self.results.push(result);
    }

    /// Consume the stream until every sender has been dropped.
    pub async fn drain(&mut self, mut rx: UnboundedReceiver<ScanResult>) {
        while let Some(result) = rx.recv().await {
            self.push(result);
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sort and freeze the collected results.
    pub fn finish(
        mut self,
        host: impl Into<String>,
        ports_scanned: usize,
        elapsed: Duration,
        cancelled: bool,
    ) -> ScanReport {
        // Stable, so equal ports keep arrival order.
        self.results.sort_by_key(|r| r.port);
        let open_count = self
            .results
            .iter()
            .filter(|r| r.state == PortState::Open)
            .count();

        ScanReport {
            host: host.into(),
            ports_scanned,
            open_count,
            elapsed_ms: elapsed.as_millis() as u64,
            cancelled,
            results: self.results,
        }
    }
}
