//! Manifest formatting, overwrite confirmation, and writing.
//!
//! The manifest is written to `<root>/requirements.txt`, one
//! `name==version` line per used package. Writes go through a temporary
//! file in the same directory followed by a rename, so a failed write never
//! leaves a half-written manifest behind.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resolve::UsedPackage;

/// File name of the generated manifest.
pub const MANIFEST_FILE_NAME: &str = "requirements.txt";

/// Errors that can occur while writing the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The operator's answer to the overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    Overwrite,
    Keep,
}

/// Location of the manifest for a given project root.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE_NAME)
}

/// Renders the manifest contents: exactly `name==version\n` per package.
pub fn format_manifest(used: &[UsedPackage]) -> String {
    let mut contents = String::new();
    for package in used {
        contents.push_str(&package.name);
        contents.push_str("==");
        contents.push_str(&package.version);
        contents.push('\n');
    }
    contents
}

/// Writes the manifest atomically: the contents go to a sibling temporary
/// file first, which is then renamed over the target.
pub fn write_manifest(path: &Path, used: &[UsedPackage]) -> Result<(), ManifestError> {
    let tmp = path.with_extension("txt.tmp");

    fs::write(&tmp, format_manifest(used)).map_err(|source| ManifestError::Write {
        path: tmp.clone(),
        source,
    })?;

    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        ManifestError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Prompts until the operator answers `y`/`Y` (overwrite) or `n`/`N` (keep);
/// anything else re-prompts. End of input counts as keeping the existing
/// file, so a closed stdin cannot loop forever.
pub fn confirm_overwrite<R, W>(path: &Path, input: R, output: &mut W) -> io::Result<OverwriteChoice>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(
            output,
            "\"{}\" already exists.\nDo you want to overwrite? (Y/N): ",
            path.display()
        )?;
        output.flush()?;

        match lines.next() {
            Some(line) => match line?.trim() {
                "y" | "Y" => return Ok(OverwriteChoice::Overwrite),
                "n" | "N" => return Ok(OverwriteChoice::Keep),
                _ => continue,
            },
            None => return Ok(OverwriteChoice::Keep),
        }
    }
}
