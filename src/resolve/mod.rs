//! Matching imported names against the installed inventory.
//!
//! Imports with no installed counterpart are silently dropped: standard
//! library modules never appear in the inventory, so this match is what
//! keeps `os` and `sys` out of the manifest.

use std::collections::HashSet;

use serde::Serialize;

use crate::inventory::InstalledPackage;

/// An installed package matched by at least one import in the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsedPackage {
    /// Name in the inventory's casing, not the import's.
    pub name: String,
    pub version: String,
}

impl UsedPackage {
    /// Creates a new UsedPackage instance.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Resolves each imported name against the inventory, case-insensitively.
///
/// The output keeps the imported names' order (sorted upstream). For each
/// name the first matching inventory entry wins, so an inventory that
/// somehow lists a name twice contributes its first occurrence. No package
/// appears in the result twice.
pub fn resolve_used(imported: &[String], installed: &[InstalledPackage]) -> Vec<UsedPackage> {
    let mut used = Vec::new();
    let mut seen = HashSet::new();

    for name in imported {
        let lowered = name.to_lowercase();
        let hit = installed
            .iter()
            .find(|package| package.name.to_lowercase() == lowered);
        if let Some(package) = hit {
            if seen.insert(package.name.to_lowercase()) {
                used.push(UsedPackage::new(&package.name, &package.version));
            }
        }
    }

    used
}
