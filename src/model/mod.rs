//! Core data types for resolved packages and scan verdicts.
//!
//! - [`ResolvedPackage`] - a `(name, version)` pair extracted from a lockfile
//! - [`ScanStatus`] - the overall scan outcome
//! - [`ScanVerdict`] - counts, matches, and status for one scan run
//!
//! # Example
//!
//! ```
//! use lockscan::{ResolvedPackage, ScanVerdict};
//!
//! let hit = ResolvedPackage::new("ngx-toastr", "19.0.2");
//! let verdict = ScanVerdict::completed(2, vec![hit]);
//!
//! assert_eq!(verdict.exit_code(), 1);
//! ```

mod package;
mod verdict;

pub use package::*;
pub use verdict::*;
