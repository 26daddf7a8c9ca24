//! pip-based inventory provider.
//!
//! Shells out to `<python> -m pip freeze` and parses the listing. The
//! interpreter must be the one the analyzed project runs under, or the
//! versions in the manifest will not match the project's environment.

use std::process::Command;

use super::{parse_freeze_output, Inventory, InventoryError, InventoryProvider, InventoryResult};

/// Lists installed distributions via `pip freeze`.
pub struct PipFreeze {
    python: String,
}

impl PipFreeze {
    /// Uses the `python` interpreter found on PATH.
    pub fn new() -> Self {
        Self::with_interpreter("python")
    }

    /// Uses a specific interpreter (e.g. `python3`, or a venv's binary).
    pub fn with_interpreter(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} -m pip freeze", self.python)
    }
}

impl Default for PipFreeze {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryProvider for PipFreeze {
    fn installed(&self) -> InventoryResult<Inventory> {
        let output = Command::new(&self.python)
            .args(["-m", "pip", "freeze"])
            .output()
            .map_err(|source| InventoryError::Spawn {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(InventoryError::Failed {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_freeze_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
