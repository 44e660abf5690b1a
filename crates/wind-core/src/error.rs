// File: crates/wind-core/src/error.rs
// Summary: Fatal load errors. Per-field parse failures are reported as `FieldIssue`s instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::sample::Field;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected at least 3 fields, found {found}")]
    MissingFields { line: u64, found: usize },
    #[error("line {line}: invalid {field} {raw:?}: {reason}")]
    InvalidField {
        line: u64,
        field: Field,
        raw: String,
        reason: String,
    },
}
