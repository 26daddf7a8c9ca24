//! Installed-package inventory.
//!
//! The resolver needs an ordered list of `(name, version)` pairs describing
//! the distributions installed in the current environment. The
//! [`InventoryProvider`] trait is the seam: production runs use
//! [`pip::PipFreeze`], tests and callers with a pre-captured freeze listing
//! use [`StaticInventory`].

pub mod pip;

use thiserror::Error;

pub use pip::PipFreeze;

/// Errors that can occur while listing installed packages.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The interpreter could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The freeze command ran but reported failure.
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Result type alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// One installed distribution, casing as reported by the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}

impl InstalledPackage {
    /// Creates a new InstalledPackage instance.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// The installed-package listing, with a count of entries that could not be
/// parsed.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Parsed entries, in the order the environment reported them.
    pub packages: Vec<InstalledPackage>,
    /// Entries skipped for lack of a `==` version pin (editable installs,
    /// direct URL references).
    pub skipped: usize,
}

/// Source of the installed-package inventory.
pub trait InventoryProvider {
    /// Lists every distribution installed in the current environment.
    fn installed(&self) -> InventoryResult<Inventory>;
}

/// Fixed in-memory inventory.
pub struct StaticInventory {
    packages: Vec<InstalledPackage>,
}

impl StaticInventory {
    pub fn new(packages: Vec<InstalledPackage>) -> Self {
        Self { packages }
    }
}

impl InventoryProvider for StaticInventory {
    fn installed(&self) -> InventoryResult<Inventory> {
        Ok(Inventory {
            packages: self.packages.clone(),
            skipped: 0,
        })
    }
}

/// Parses freeze-style output, one `name==version` entry per line.
///
/// Lines without the `==` separator are counted as skipped rather than
/// aborting the listing.
pub fn parse_freeze_output(output: &str) -> Inventory {
    let mut inventory = Inventory::default();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once("==") {
            Some((name, version)) if !name.is_empty() && !version.is_empty() => {
                inventory.packages.push(InstalledPackage::new(name, version));
            }
            _ => inventory.skipped += 1,
        }
    }

    inventory
}
