//! Package-name normalization.
//!
//! Each raw import statement yields zero or more candidate names:
//!
//! - Plain form `import a, b.c, d as e`: one candidate per comma-separated
//!   entry, alias dropped, first dot segment kept.
//! - From form `from pkg.sub import x as y, z`: the module path between the
//!   `from` and `import` keywords, first dot segment kept. Aliases on the
//!   imported symbols never reach the module path.
//!
//! Candidates starting with `.` (relative import) or `_` (private module)
//! are discarded. A trailing `#comment` fragment that survives extraction is
//! truncated in a post-pass. Accumulation goes through a set, so the final
//! sequence is deduplicated and lexicographically sorted.

use std::collections::BTreeSet;

/// Strips the keyword off the front of a statement, requiring at least one
/// whitespace character after it.
fn keyword_rest<'a>(statement: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = statement.trim_start().strip_prefix(keyword)?;
    rest.starts_with(|c: char| c.is_whitespace()).then_some(rest)
}

/// Returns true for characters allowed in a from-import module path:
/// word characters, dots, and the whitespace around them.
fn is_module_path_char(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == '_' || c.is_alphanumeric()
}

/// Module path of a from-import: the text between the `from` keyword and the
/// last `import` occurrence reachable through module-path characters.
///
/// Searching for the last reachable occurrence keeps `from importlib.abc
/// import x` pointing at the standalone keyword, not the one embedded in
/// `importlib`.
fn from_module_part(rest: &str) -> Option<&str> {
    let mut cut = None;
    let mut search_from = 0;

    while let Some(pos) = rest[search_from..].find("import") {
        let start = search_from + pos;
        if !rest[..start].chars().all(is_module_path_char) {
            break;
        }
        cut = Some(start);
        search_from = start + "import".len();
    }

    cut.map(|i| &rest[..i])
}

/// Keeps the first dot segment of a module path, discarding relative and
/// private names.
fn push_top_level(module: &str, names: &mut Vec<String>) {
    if module.is_empty() || module.starts_with('.') || module.starts_with('_') {
        return;
    }
    if let Some(top) = module.split('.').next() {
        names.push(top.to_string());
    }
}

/// Parses one raw import statement into its candidate top-level package
/// names, in source order, before deduplication and comment stripping.
pub fn statement_packages(statement: &str) -> Vec<String> {
    let mut names = Vec::new();

    if let Some(rest) = keyword_rest(statement, "import") {
        for entry in rest.split(',') {
            let Some(module) = entry.split_whitespace().next() else {
                continue;
            };
            push_top_level(module, &mut names);
        }
    } else if let Some(rest) = keyword_rest(statement, "from") {
        if let Some(part) = from_module_part(rest) {
            let module: String = part.chars().filter(|c| !c.is_whitespace()).collect();
            push_top_level(&module, &mut names);
        }
    }

    names
}

/// Truncates a candidate at a leaked inline comment.
fn strip_trailing_comment(name: &str) -> &str {
    match name.find('#') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Collects the package names of a batch of raw import statements into a
/// deduplicated, lexicographically sorted sequence.
pub fn collect_package_names<I, S>(statements: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = BTreeSet::new();

    for statement in statements {
        for candidate in statement_packages(statement.as_ref()) {
            let name = strip_trailing_comment(&candidate);
            if !name.is_empty() {
                names.insert(name.to_string());
            }
        }
    }

    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_import_single() {
        assert_eq!(statement_packages("import os"), vec!["os"]);
    }

    #[test]
    fn test_plain_import_multi_yields_all_names() {
        assert_eq!(
            statement_packages("import a, b.c, d as e"),
            vec!["a", "b", "d"]
        );
    }

    #[test]
    fn test_plain_import_keeps_top_level_segment_only() {
        assert_eq!(statement_packages("import numpy.linalg"), vec!["numpy"]);
    }

    #[test]
    fn test_plain_import_alias_stripped() {
        assert_eq!(statement_packages("import numpy as np"), vec!["numpy"]);
    }

    #[test]
    fn test_plain_import_discards_private_entries() {
        assert_eq!(statement_packages("import _internal, os"), vec!["os"]);
    }

    #[test]
    fn test_from_import_yields_source_package() {
        assert_eq!(
            statement_packages("from pkg.sub import x as y, z"),
            vec!["pkg"]
        );
    }

    #[test]
    fn test_from_relative_import_yields_nothing() {
        assert!(statement_packages("from .relative import x").is_empty());
        assert!(statement_packages("from . import sibling").is_empty());
    }

    #[test]
    fn test_from_private_import_yields_nothing() {
        assert!(statement_packages("from _vendor import x").is_empty());
    }

    #[test]
    fn test_from_without_import_keyword_yields_nothing() {
        assert!(statement_packages("from pkg").is_empty());
    }

    #[test]
    fn test_from_importlib_finds_standalone_keyword() {
        assert_eq!(
            statement_packages("from importlib.abc import Loader"),
            vec!["importlib"]
        );
    }

    #[test]
    fn test_import_importlib_is_not_mangled() {
        assert_eq!(statement_packages("import importlib"), vec!["importlib"]);
    }

    #[test]
    fn test_indented_statement() {
        assert_eq!(statement_packages("    import json"), vec!["json"]);
    }

    #[test]
    fn test_joined_continuation_statement() {
        assert_eq!(statement_packages("import a, b"), vec!["a", "b"]);
    }

    #[test]
    fn test_non_import_statement_yields_nothing() {
        assert!(statement_packages("x = 1").is_empty());
        assert!(statement_packages("importlib.reload(x)").is_empty());
    }

    #[test]
    fn test_collect_sorts_and_dedupes() {
        let names = collect_package_names(["import zlib", "import os", "import os, zlib"]);
        assert_eq!(names, vec!["os", "zlib"]);
    }

    #[test]
    fn test_collect_strips_leaked_comment() {
        let names = collect_package_names(["import os#comment"]);
        assert_eq!(names, vec!["os"]);
    }

    #[test]
    fn test_collect_drops_candidates_emptied_by_comment() {
        let names = collect_package_names(["import #comment"]);
        assert!(names.is_empty());
    }

    #[test]
    fn test_collect_is_deterministic() {
        let statements = ["import b", "from a.x import y", "import c as d"];
        let first = collect_package_names(statements);
        let second = collect_package_names(statements);
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b", "c"]);
    }
}
