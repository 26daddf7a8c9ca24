//! Recursive project-tree walker with directory exclusion.
//!
//! Enumerates every file reachable from the root, pruning whole subtrees
//! whose directory name matches a configured exclusion. Exclusions are
//! compared segment-exact: `venv` prunes `a/venv` and `a/b/venv` at any
//! depth, while `venvx` and `myvenv` are still walked.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

/// Diagnostic counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories visited, including pruned ones. The contents of a pruned
    /// directory are never visited and never counted.
    pub dirs_visited: usize,
    /// Directories pruned by the exclusion list.
    pub dirs_skipped: usize,
    /// Files collected.
    pub files_found: usize,
}

/// Result of walking a project tree.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Every file found, in walk order.
    pub files: Vec<PathBuf>,
    /// Diagnostic counters.
    pub stats: WalkStats,
    /// Recoverable per-entry problems (unreadable directories and the like).
    pub warnings: Vec<String>,
}

/// Walks `root` recursively and collects all file paths, pruning any
/// directory whose name appears in `skip_dirs`.
///
/// Unreadable entries are reported as warnings and skipped; they never
/// abort the walk.
pub fn walk_files(root: &Path, skip_dirs: &[String]) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();

    let mut it = WalkDir::new(root).into_iter();
    while let Some(entry) = it.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                outcome.warnings.push(format!("skipping unreadable entry: {err}"));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            outcome.stats.dirs_visited += 1;
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if is_excluded(rel, skip_dirs) {
                outcome.stats.dirs_skipped += 1;
                it.skip_current_dir();
            }
        } else if entry.file_type().is_file() {
            outcome.stats.files_found += 1;
            outcome.files.push(entry.path().to_path_buf());
        }
    }

    outcome
}

/// Returns true if any segment of the root-relative path matches one of the
/// excluded names exactly.
fn is_excluded(rel: &Path, skip_dirs: &[String]) -> bool {
    rel.components().any(|component| match component {
        Component::Normal(name) => skip_dirs.iter().any(|skip| name.to_str() == Some(skip.as_str())),
        _ => false,
    })
}
