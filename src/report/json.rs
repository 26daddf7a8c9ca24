//! JSON report rendering.
//!
//! Serializes the report as-is for machine-readable output.

use std::io::{self, Write};

use super::{Exporter, ScanReport};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &ScanReport, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_report;

    #[test]
    fn test_json_export_round_trips() {
        let mut buffer = Vec::new();
        JsonExporter.export(&sample_report(), &mut buffer).unwrap();

        let json = String::from_utf8(buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["root"], "/proj");
        assert_eq!(parsed["files_found"], 12);
        assert_eq!(parsed["imported_packages"][1], "requests");
        assert_eq!(parsed["used_packages"][0]["name"], "requests");
        assert_eq!(parsed["used_packages"][0]["version"], "2.31.0");
    }

    #[test]
    fn test_json_is_valid() {
        let mut buffer = Vec::new();
        JsonExporter.export(&sample_report(), &mut buffer).unwrap();

        let json = String::from_utf8(buffer).unwrap();
        let result: Result<serde_json::Value, _> = serde_json::from_str(&json);
        assert!(result.is_ok());
    }
}
