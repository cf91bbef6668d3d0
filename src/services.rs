//! Service labels for well-known port numbers.
//!
//! Provides mapping from port numbers to likely service names. This is a
//! static lookup only; no protocol fingerprinting is performed.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Label used for ports missing from the table.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Static map of well-known ports to service names.
static PORT_SERVICES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(20, "FTP-DATA");
    m.insert(21, "FTP");
    m.insert(22, "SSH");
    m.insert(23, "Telnet");
    m.insert(25, "SMTP");
    m.insert(53, "DNS");
    m.insert(80, "HTTP");
    m.insert(110, "POP3");
    m.insert(143, "IMAP");
    m.insert(443, "HTTPS");
    m.insert(465, "SMTPS");
    m.insert(587, "SMTP");
    m.insert(993, "IMAPS");
    m.insert(995, "POP3S");
    m.insert(1433, "MSSQL");
    m.insert(3306, "MySQL");
    m.insert(3389, "RDP");
    m.insert(5432, "PostgreSQL");
    m.insert(27017, "MongoDB");

    m
});

/// Look up the service name for a given port.
///
/// Returns `None` if the port is not in the well-known services table.
pub fn service_name(port: u16) -> Option<&'static str> {
    PORT_SERVICES.get(&port).copied()
}

/// Service label for a port, falling back to [`UNKNOWN_SERVICE`].
pub fn service_label(port: u16) -> &'static str {
    service_name(port).unwrap_or(UNKNOWN_SERVICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ports() {
        assert_eq!(service_name(22), Some("SSH"));
        assert_eq!(service_name(80), Some("HTTP"));
        assert_eq!(service_name(443), Some("HTTPS"));
        assert_eq!(service_name(5432), Some("PostgreSQL"));
    }

    #[test]
    fn test_unknown_port() {
        assert_eq!(service_name(9999), None);
        assert_eq!(service_label(9999), "Unknown");
    }
}
