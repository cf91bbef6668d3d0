//! JSON output formatting.

use crate::scanner::ScanReport;
use std::io::{self, Write};

/// Print the report as pretty-printed JSON.
pub fn print_json(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use crate::scanner::{PortState, ResultAggregator, ScanResult};
    use std::time::Duration;

    #[test]
    fn test_report_json_shape() {
        let mut agg = ResultAggregator::new();
        agg.push(ScanResult::new(443, PortState::Open));
        let report = agg.finish("example.com", 1, Duration::from_millis(5), false);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["host"], "example.com");
        assert_eq!(value["open_count"], 1);
        assert_eq!(value["cancelled"], false);
        assert_eq!(value["results"][0]["port"], 443);
        assert_eq!(value["results"][0]["state"], "Open");
        assert_eq!(value["results"][0]["service"], "HTTPS");
    }
}
