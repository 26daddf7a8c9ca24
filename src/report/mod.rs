//! Scan report assembly and rendering.
//!
//! A [`ScanReport`] aggregates the diagnostic counters and results of one
//! pipeline run. Reports can be rendered as human-readable text or as JSON
//! for machine consumption.

pub mod json;
pub mod text;

use std::io::{self, Write};

use serde::Serialize;

use crate::resolve::UsedPackage;

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything one scan run found, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Root of the scanned tree.
    pub root: String,
    /// Directories visited, including pruned ones.
    pub dirs_visited: usize,
    /// Directories pruned by the exclusion list.
    pub dirs_skipped: usize,
    /// Files found by the walk.
    pub files_found: usize,
    /// Python source files scanned.
    pub files_scanned: usize,
    /// Logical import statements extracted.
    pub import_statements: usize,
    /// Imported top-level package names, sorted.
    pub imported_packages: Vec<String>,
    /// Size of the installed-package inventory.
    pub installed_packages: usize,
    /// Inventory entries skipped for lack of a version pin.
    pub skipped_inventory_entries: usize,
    /// Packages that made it into the manifest.
    pub used_packages: Vec<UsedPackage>,
}

/// Trait for report exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &ScanReport, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(
    format: ReportFormat,
    report: &ScanReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextExporter::default().export(report, writer),
        ReportFormat::Json => json::JsonExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ReportFormat, report: &ScanReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_report() -> ScanReport {
    ScanReport {
        root: "/proj".to_string(),
        dirs_visited: 4,
        dirs_skipped: 1,
        files_found: 12,
        files_scanned: 5,
        import_statements: 9,
        imported_packages: vec!["os".to_string(), "requests".to_string()],
        installed_packages: 120,
        skipped_inventory_entries: 2,
        used_packages: vec![UsedPackage::new("requests", "2.31.0")],
    }
}
