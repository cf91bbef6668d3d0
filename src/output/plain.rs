//! Plain text output formatting.
//!
//! Produces a human-readable table with colors.

use crate::scanner::{PortState, ScanReport};
use console::{style, Style};
use std::io::{self, Write};
use std::time::Duration;

/// Print the report as a table of open ports followed by a summary line.
pub fn print_plain(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, report, true)
}

/// Render the report into `out`. Colors are applied only when `styled`.
pub fn write_plain<W: Write>(out: &mut W, report: &ScanReport, styled: bool) -> io::Result<()> {
    writeln!(out)?;
    if !report.is_empty() {
        let header = format!("{:<8}{:<11}{}", "Port", "State", "Service");
        if styled {
            writeln!(out, "{}", style(header).bold())?;
        } else {
            writeln!(out, "{header}")?;
        }
        writeln!(out, "{:<8}{:<11}{}", "----", "-----", "-------")?;

        for result in &report.results {
            let state_style = match result.state {
                PortState::Open => Style::new().green().bold(),
                PortState::Closed => Style::new().red(),
                PortState::Filtered => Style::new().yellow(),
            };
            let state = format!("{:<11}", result.state.to_string());
            let state = if styled {
                state_style.apply_to(state).to_string()
            } else {
                state
            };

            writeln!(out, "{:<8}{}{}", result.port, state, result.service)?;
        }
        writeln!(out)?;
    }

    if report.open_count == 0 {
        writeln!(out, "No open ports found.")?;
    } else {
        writeln!(out, "Found {} open ports", report.open_count)?;
    }

    Ok(())
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(host: &str, ports: usize, workers: usize, timeout: Duration) {
    eprintln!();
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portscanner").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{} Target: {}", style("•").dim(), style(host).white().bold());
    eprintln!(
        "{} Scanning {} ports with {} workers ({}s timeout)...",
        style("•").dim(),
        style(ports).white().bold(),
        workers,
        timeout.as_secs_f64()
    );
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{ResultAggregator, ScanResult};

    fn render(results: &[(u16, PortState)]) -> String {
        let mut agg = ResultAggregator::new();
        for &(port, state) in results {
            agg.push(ScanResult::new(port, state));
        }
        let report = agg.finish("localhost", 100, Duration::ZERO, false);

        let mut buf = Vec::new();
        write_plain(&mut buf, &report, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_rows_in_port_order() {
        let text = render(&[(80, PortState::Open), (22, PortState::Open)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["Port", "State", "Service"]);
        assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["22", "Open", "SSH"]);
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), ["80", "Open", "HTTP"]);
        assert!(text.trim_end().ends_with("Found 2 open ports"));
    }

    #[test]
    fn test_empty_report_message() {
        let text = render(&[]);
        assert_eq!(text.trim(), "No open ports found.");
    }

    #[test]
    fn test_closed_rows_do_not_count_as_open() {
        let text = render(&[(23, PortState::Closed)]);
        assert!(text.contains("Closed"));
        assert!(text.trim_end().ends_with("No open ports found."));
    }
}
