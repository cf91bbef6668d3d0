//! Prober trait abstraction.
//!
//! Defines the single-port probing interface the coordinator drives, so the
//! worker pool can be exercised against a simulated host in tests.

use crate::services::service_label;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a reported port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortState {
    /// Port accepted a connection before the deadline.
    Open,
    /// Connection was actively refused.
    Closed,
    /// No answer before the deadline, or the target was unreachable.
    Filtered,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
            Self::Filtered => write!(f, "Filtered"),
        }
    }
}

/// A reported port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub port: u16,
    pub state: PortState,
    pub service: String,
}

impl ScanResult {
    /// Create a result, labelling the port from the well-known services table.
    pub fn new(port: u16, state: PortState) -> Self {
        Self {
            port,
            state,
            service: service_label(port).to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

/// Raw outcome of one connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Open,
    Refused,
    TimedOut,
    Unreachable,
}

impl ProbeOutcome {
    /// Convert the outcome into a reportable result.
    ///
    /// Only `Open` produces a result unless `report_closed` is set.
    pub fn into_result(self, port: u16, report_closed: bool) -> Option<ScanResult> {
        let state = match self {
            Self::Open => PortState::Open,
            Self::Refused if report_closed => PortState::Closed,
            Self::TimedOut | Self::Unreachable if report_closed => PortState::Filtered,
            _ => return None,
        };
        Some(ScanResult::new(port, state))
    }
}

/// Something that can probe a single port on a fixed target.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Attempt one connection to `port`. Never retries.
    async fn probe(&self, port: u16) -> ProbeOutcome;
}

#[async_trait]
impl<P: Prober + ?Sized> Prober for std::sync::Arc<P> {
    async fn probe(&self, port: u16) -> ProbeOutcome {
        (**self).probe(port).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_state_display() {
        assert_eq!(PortState::Open.to_string(), "Open");
        assert_eq!(PortState::Closed.to_string(), "Closed");
        assert_eq!(PortState::Filtered.to_string(), "Filtered");
    }

    #[test]
    fn test_open_outcome_is_labelled() {
        let result = ProbeOutcome::Open.into_result(22, false).unwrap();
        assert_eq!(result, ScanResult::new(22, PortState::Open));
        assert_eq!(result.service, "SSH");
        assert!(result.is_open());
    }

    #[test]
    fn test_failures_dropped_by_default() {
        for outcome in [
            ProbeOutcome::Refused,
            ProbeOutcome::TimedOut,
            ProbeOutcome::Unreachable,
        ] {
            assert_eq!(outcome.into_result(80, false), None);
        }
    }

    #[test]
    fn test_failures_reported_when_verbose() {
        let closed = ProbeOutcome::Refused.into_result(80, true).unwrap();
        assert_eq!(closed.state, PortState::Closed);

        let filtered = ProbeOutcome::TimedOut.into_result(81, true).unwrap();
        assert_eq!(filtered.state, PortState::Filtered);
        assert_eq!(filtered.service, "Unknown");

        let unreachable = ProbeOutcome::Unreachable.into_result(443, true).unwrap();
        assert_eq!(unreachable.state, PortState::Filtered);
        assert!(!unreachable.is_open());
    }
}
