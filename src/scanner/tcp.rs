//! TCP connect prober.
//!
//! Performs standard TCP connect probes using the operating system's socket
//! API. Does not require elevated privileges.

use crate::scanner::traits::{ProbeOutcome, Prober};
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Probes ports on one host with a fixed connect deadline.
///
/// The deadline covers name resolution as well as the handshake, so an
/// unresolvable host costs at most one timeout per probe.
#[derive(Debug, Clone)]
pub struct TcpProber {
    host: String,
    timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP connect prober.
    pub fn new(host: impl Into<String>, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, port: u16) -> ProbeOutcome {
        match timeout(self.timeout, TcpStream::connect((self.host.as_str(), port))).await {
            // Dropping the stream closes the socket.
            Ok(Ok(_stream)) => ProbeOutcome::Open,
            Ok(Err(e)) => classify_error(&e),
            Err(_) => ProbeOutcome::TimedOut,
        }
    }
}

fn classify_error(err: &io::Error) -> ProbeOutcome {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => ProbeOutcome::Refused,
        io::ErrorKind::TimedOut => ProbeOutcome::TimedOut,
        _ => ProbeOutcome::Unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let prober = TcpProber::new("127.0.0.1", Duration::from_secs(1));
        assert_eq!(prober.probe(port).await, ProbeOutcome::Open);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        // Bind then drop to get a port that is very likely closed.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let prober = TcpProber::new("127.0.0.1", Duration::from_millis(500));
        assert_ne!(prober.probe(port).await, ProbeOutcome::Open);
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_not_open() {
        let prober = TcpProber::new("host.invalid", Duration::from_millis(500));
        assert_ne!(prober.probe(80).await, ProbeOutcome::Open);
    }

    #[test]
    fn test_classify_error() {
        let refused = io::Error::from(io::ErrorKind::ConnectionRefused);
        assert_eq!(classify_error(&refused), ProbeOutcome::Refused);

        let other = io::Error::new(io::ErrorKind::Other, "network unreachable");
        assert_eq!(classify_error(&other), ProbeOutcome::Unreachable);
    }
}
