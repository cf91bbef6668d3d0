//! Scanner module - probes ports and coordinates the worker pool.
//!
//! [`TcpProber`] performs a single connect per port; [`ScanCoordinator`]
//! fans a port list out to a fixed number of workers and hands the results
//! to the [`ResultAggregator`].

pub mod aggregator;
pub mod coordinator;
pub mod tcp;
pub mod traits;

pub use aggregator::{ResultAggregator, ScanReport};
pub use coordinator::ScanCoordinator;
pub use tcp::TcpProber;
pub use traits::{PortState, ProbeOutcome, Prober, ScanResult};

use crate::config::ScanConfig;
use crate::error::ScanError;
use tokio_util::sync::CancellationToken;

/// Scan `config.host()` over TCP with the default prober.
pub async fn run_scan(
    config: ScanConfig,
    cancel: CancellationToken,
) -> Result<ScanReport, ScanError> {
    let prober = TcpProber::new(config.host(), config.timeout());
    ScanCoordinator::new(config, prober)
        .with_cancellation(cancel)
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_run_scan_finds_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open = listener.local_addr().unwrap().port();
        let closed = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().port()
        };

        let config = ScanConfig::builder("127.0.0.1")
            .ports(vec![closed, open].into())
            .workers(2)
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();

        let report = run_scan(config, CancellationToken::new()).await.unwrap();
        assert_eq!(report.ports_scanned, 2);
        assert_eq!(report.open_count, 1);
        assert_eq!(report.results[0].port, open);
        assert_eq!(report.results[0].state, PortState::Open);
    }
}
