//! Port specification parsing.
//!
//! A [`PortSpec`] is the ordered list of ports a scan will submit as jobs.
//! Parsing is literal: tokens keep their order, ranges expand in place, and
//! overlapping tokens produce duplicate entries. Use [`PortSpec::dedup`] to
//! collapse them explicitly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Highest valid TCP port number.
pub const MAX_PORT: u16 = u16::MAX;

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("invalid port token: '{0}'")]
    InvalidToken(String),
    #[error("invalid port range: start ({start}) > end ({end})")]
    InvalidRange { start: u16, end: u16 },
    #[error("port {0} is out of valid range (0-65535)")]
    OutOfRange(u64),
}

/// An ordered sequence of ports requested for scanning.
///
/// Supports formats like:
/// - Single port: "80"
/// - Comma-separated: "80,443,8080"
/// - Range: "1-1000"
/// - Mixed: "22,80,443,8000-9000"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortSpec {
    ports: Vec<u16>,
}

impl PortSpec {
    /// Create an empty port specification.
    pub const fn new() -> Self {
        Self { ports: Vec::new() }
    }

    /// Parse a comma-separated specification.
    ///
    /// An empty (or whitespace-only) string yields an empty spec.
    pub fn parse(s: &str) -> Result<Self, PortError> {
        let s = s.trim();
        let mut spec = Self::new();
        if s.is_empty() {
            return Ok(spec);
        }

        for token in s.split(',') {
            let token = token.trim();
            match token.split_once('-') {
                Some((a, b)) => {
                    let start = parse_port(a.trim(), token)?;
                    let end = parse_port(b.trim(), token)?;
                    if start > end {
                        return Err(PortError::InvalidRange { start, end });
                    }
                    spec.ports.extend(start..=end);
                }
                None => spec.ports.push(parse_port(token, token)?),
            }
        }

        Ok(spec)
    }

    /// Every port from 0 through 65535, in ascending order.
    pub fn full() -> Self {
        Self {
            ports: (0..=MAX_PORT).collect(),
        }
    }

    /// Remove repeated ports, keeping the first occurrence of each.
    pub fn dedup(self) -> Self {
        let mut seen = HashSet::with_capacity(self.ports.len());
        let ports = self.ports.into_iter().filter(|p| seen.insert(*p)).collect();
        Self { ports }
    }

    /// Ports in submission order.
    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    /// Number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl From<Vec<u16>> for PortSpec {
    fn from(ports: Vec<u16>) -> Self {
        Self { ports }
    }
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ports.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Parse one bound. `token` is the whole comma-delimited token, for errors.
fn parse_port(s: &str, token: &str) -> Result<u16, PortError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortError::InvalidToken(token.to_string()));
    }
    // Digits only, so the sole parse failure left is overflow.
    let value: u64 = s.parse().map_err(|_| PortError::OutOfRange(u64::MAX))?;
    u16::try_from(value).map_err(|_| PortError::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<u16>, PortError> {
        PortSpec::parse(s).map(|spec| spec.ports().to_vec())
    }

    #[test]
    fn test_mixed_tokens_keep_order() {
        assert_eq!(
            parse("80,443,8000-8002").unwrap(),
            vec![80, 443, 8000, 8001, 8002]
        );
        assert_eq!(parse("443, 22 ,80").unwrap(), vec![443, 22, 80]);
    }

    #[test]
    fn test_empty_spec() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(parse("abc"), Err(PortError::InvalidToken("abc".into())));
        assert!(matches!(parse("80,,443"), Err(PortError::InvalidToken(_))));
        assert!(matches!(parse("1-2-3"), Err(PortError::InvalidToken(_))));
        assert!(matches!(parse("-5"), Err(PortError::InvalidToken(_))));
        assert!(matches!(parse("80-"), Err(PortError::InvalidToken(_))));
        assert!(matches!(parse("+80"), Err(PortError::InvalidToken(_))));
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(
            parse("100-50"),
            Err(PortError::InvalidRange { start: 100, end: 50 })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse("70000"), Err(PortError::OutOfRange(70000)));
        assert_eq!(parse("65530-65536"), Err(PortError::OutOfRange(65536)));
        assert!(matches!(
            parse("99999999999999999999999"),
            Err(PortError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_bounds_are_valid() {
        assert_eq!(parse("0").unwrap(), vec![0]);
        assert_eq!(parse("65535").unwrap(), vec![65535]);
        assert_eq!(parse("65534-65535").unwrap(), vec![65534, 65535]);
    }

    #[test]
    fn test_overlap_keeps_duplicates() {
        assert_eq!(parse("80-82,81").unwrap(), vec![80, 81, 82, 81]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let spec = PortSpec::parse("443,80-82,81,443").unwrap().dedup();
        assert_eq!(spec.ports(), &[443, 80, 81, 82]);
    }

    #[test]
    fn test_full_sweep() {
        let spec = PortSpec::full();
        assert_eq!(spec.len(), 65536);
        assert_eq!(spec.ports().first(), Some(&0));
        assert_eq!(spec.ports().last(), Some(&65535));
    }

    #[test]
    fn test_display() {
        let spec: PortSpec = "22,80-81".parse().unwrap();
        assert_eq!(spec.to_string(), "22,80,81");
    }
}
