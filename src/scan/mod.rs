//! Source-tree scanning for reqscan.
//!
//! Two stages: a recursive walker that enumerates files under the project
//! root while pruning excluded directories, and a line-oriented extractor
//! that pulls raw import statements out of Python source files.
//!
//! # Example
//!
//! ```ignore
//! use reqscan::scan::{walk_files, extract_imports};
//!
//! let walk = walk_files(Path::new("./proj"), &["venv".to_string()]);
//! let extraction = extract_imports(&walk.files);
//! for import in &extraction.imports {
//!     println!("{}: {}", import.file.display(), import.text);
//! }
//! ```

pub mod imports;
pub mod walker;

// Re-export main types for convenience
pub use imports::{
    extract_file, extract_imports, extract_source, is_scannable_source, ExtractError, Extraction,
    RawImport,
};
pub use walker::{walk_files, WalkOutcome, WalkStats};
