//! Line-oriented import extraction from Python source files.
//!
//! An import line starts (after leading whitespace) with the `import` or
//! `from` keyword followed by whitespace. A trailing backslash continues the
//! statement onto the next physical line; continued fragments are joined by
//! a single space into one logical statement. Nothing else in the file is
//! parsed.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while extracting imports from one file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be read, or was not valid UTF-8.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One logical import statement, continuations already joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImport {
    /// The file the statement was found in. Kept for diagnostics.
    pub file: PathBuf,
    /// The statement text, trailing whitespace trimmed.
    pub text: String,
}

/// Result of extracting imports from a batch of files.
#[derive(Debug, Default)]
pub struct Extraction {
    /// All import statements, in file-then-line order.
    pub imports: Vec<RawImport>,
    /// Number of Python source files considered.
    pub files_scanned: usize,
    /// Files skipped because they could not be read.
    pub warnings: Vec<String>,
}

/// Returns true if the path names a Python source file to scan.
///
/// The path must end in `.py` and contain a non-underscore character before
/// the final pre-extension character. Walked paths always contain a path
/// separator, so in practice only bare degenerate names such as `_.py` are
/// rejected by the second condition.
pub fn is_scannable_source(path: &Path) -> bool {
    let text = path.to_string_lossy();
    let Some(stem) = text.strip_suffix(".py") else {
        return false;
    };
    let bytes = stem.as_bytes();
    bytes.len() >= 2 && bytes[..bytes.len() - 1].iter().any(|&b| b != b'_')
}

/// Returns true if the line opens an import statement: the `import` or
/// `from` keyword after leading whitespace, followed by more whitespace.
fn is_import_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["import", "from"].iter().any(|keyword| {
        trimmed
            .strip_prefix(keyword)
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace()))
    })
}

/// Extracts the logical import statements of one source text.
///
/// Runs a two-state accumulator: a classified line ending in `\` puts the
/// extractor into a continuing state, in which the next physical line is
/// appended (backslash removed, fragments joined by a single space) to the
/// pending statement. Continuations can chain.
pub fn extract_source(file: &Path, source: &str) -> Vec<RawImport> {
    let mut imports: Vec<RawImport> = Vec::new();
    let mut continuing = false;

    for raw_line in source.lines() {
        let line = raw_line.trim_end();

        if continuing {
            if let Some(last) = imports.last_mut() {
                let joined = {
                    let head = last.text.strip_suffix('\\').unwrap_or(&last.text).trim_end();
                    format!("{} {}", head, line.trim_start())
                };
                last.text = joined;
            }
            continuing = line.ends_with('\\');
            continue;
        }

        if is_import_line(line) {
            continuing = line.ends_with('\\');
            imports.push(RawImport {
                file: file.to_path_buf(),
                text: line.to_string(),
            });
        }
    }

    imports
}

/// Extracts the import statements of one file.
pub fn extract_file(path: &Path) -> Result<Vec<RawImport>, ExtractError> {
    let source = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_source(path, &source))
}

/// Extracts imports from every scannable source file in `files`, in order.
///
/// Unreadable files are reported as warnings and skipped; they never abort
/// the batch.
pub fn extract_imports(files: &[PathBuf]) -> Extraction {
    let mut extraction = Extraction::default();

    for path in files {
        if !is_scannable_source(path) {
            continue;
        }
        extraction.files_scanned += 1;
        match extract_file(path) {
            Ok(imports) => extraction.imports.extend(imports),
            Err(err) => extraction.warnings.push(err.to_string()),
        }
    }

    extraction
}
