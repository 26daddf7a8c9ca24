//! Text report rendering.
//!
//! The default view is the per-stage summary; the verbose view adds the
//! imported-name listing and an aligned name/version table.

use std::io::{self, Write};

use super::{Exporter, ScanReport};

/// How many leading entries a long table shows before eliding the middle.
const TABLE_HEAD_ROWS: usize = 30;
/// How many trailing entries a long table keeps after the elision.
const TABLE_TAIL_ROWS: usize = 4;

/// Text exporter implementation.
#[derive(Debug, Default)]
pub struct TextExporter {
    /// Include the imported-name listing and the used-package table.
    pub verbose: bool,
}

impl TextExporter {
    /// Creates an exporter with the detailed view enabled.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, report: &ScanReport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Scan of \"{}\"", report.root)?;
        writeln!(
            writer,
            "Found {} files in {} directories and subdirectories ({} pruned).",
            report.files_found, report.dirs_visited, report.dirs_skipped
        )?;
        writeln!(
            writer,
            "Found {} import statements in {} python files.",
            report.import_statements, report.files_scanned
        )?;
        writeln!(
            writer,
            "Found {} different imported packages in total.",
            report.imported_packages.len()
        )?;
        if self.verbose {
            for name in &report.imported_packages {
                writeln!(writer, "\t{}", name)?;
            }
        }
        writeln!(
            writer,
            "Found {} installed packages in total.",
            report.installed_packages
        )?;
        if report.skipped_inventory_entries > 0 {
            writeln!(
                writer,
                "Skipped {} inventory entries without a '==' version pin.",
                report.skipped_inventory_entries
            )?;
        }
        writeln!(
            writer,
            "Found {} used (non standard library) packages in total.",
            report.used_packages.len()
        )?;
        if self.verbose {
            let entries: Vec<(String, String)> = report
                .used_packages
                .iter()
                .map(|u| (u.name.clone(), u.version.clone()))
                .collect();
            write_package_table(writer, &entries, false)?;
        }
        Ok(())
    }
}

/// Writes an aligned two-column name/version table with a `PKG`/`VER`
/// header. With `elide` set, tables longer than 34 rows show the first 30
/// and last 4 entries around a skip notice.
pub fn write_package_table<W: Write>(
    writer: &mut W,
    entries: &[(String, String)],
    elide: bool,
) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("PKG".len())
        + 1;

    writeln!(writer, "\t{:<width$}{}", "PKG", "VER")?;

    let total = entries.len();
    let elide = elide && total > TABLE_HEAD_ROWS + TABLE_TAIL_ROWS;
    for (index, (name, version)) in entries.iter().enumerate() {
        if elide && index >= TABLE_HEAD_ROWS && index < total - TABLE_TAIL_ROWS {
            if index == TABLE_HEAD_ROWS {
                writeln!(writer, "\t...")?;
                writeln!(
                    writer,
                    "\tskipped {} entries for brevity...",
                    total - TABLE_HEAD_ROWS - TABLE_TAIL_ROWS
                )?;
                writeln!(writer, "\t...")?;
            }
            continue;
        }
        writeln!(writer, "\t{:<width$}{}", name, version)?;
    }

    Ok(())
}
