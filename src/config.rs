//! Pipeline configuration.
//!
//! Everything a scan run needs to know is carried in one explicit structure
//! built by the CLI and handed to the pipeline stages.

use std::path::PathBuf;

/// Directory names pruned from the walk when no explicit skip list is given.
/// These are the usual virtual-environment locations.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["env", "venv", "conda"];

/// Configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the project tree to scan.
    pub root: PathBuf,

    /// Directory names pruned from the walk, by exact path-segment match.
    pub skip_dirs: Vec<String>,

    /// Emit per-stage diagnostic detail.
    pub verbose: bool,
}

impl ScanConfig {
    /// Creates a configuration with the default skip list and quiet output.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            verbose: false,
        }
    }

    /// Replaces the skip list.
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    /// Sets the verbosity flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
