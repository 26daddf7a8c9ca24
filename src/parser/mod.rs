//! Import-statement parsing for reqscan.
//!
//! Turns raw import statements into bare top-level package names: the first
//! dot-separated segment of each imported module path, with aliases,
//! relative-import markers, private names, and trailing comments stripped.
//!
//! # Example
//!
//! ```
//! use reqscan::parser::collect_package_names;
//!
//! let names = collect_package_names(["import numpy as np", "from requests import get"]);
//! assert_eq!(names, vec!["numpy", "requests"]);
//! ```

pub mod normalize;

// Re-export main functions for convenience
pub use normalize::{collect_package_names, statement_packages};
