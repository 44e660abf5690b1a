// File: crates/wind-core/src/loader.rs
// Summary: CSV loader producing an ordered WindSample sequence plus per-field diagnostics.
// Notes:
// - The first row is always treated as a header and discarded without inspection.
// - Rows must match the header's field count; a ragged file is a fatal read error.

use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::LoadError;
use crate::sample::{self, Field, FieldIssue, WindSample};

/// What to do with a row whose timestamp, direction or velocity fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Keep the row, substitute the field's zero value and record an issue.
    #[default]
    Impute,
    /// Omit the row and record its issues.
    Drop,
    /// Abort the load on the first bad field.
    Strict,
}

/// Loader output: samples in file order and everything that went wrong along the way.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    pub samples: Vec<WindSample>,
    pub issues: Vec<FieldIssue>,
    /// Rows omitted under [`ParsePolicy::Drop`].
    pub dropped: usize,
}

impl LoadReport {
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    /// True when every field of every row parsed.
    pub fn is_clean(&self) -> bool { self.issues.is_empty() }
}

/// Open `path` and load it. The file is closed before this returns.
pub fn load_from_path(path: impl AsRef<Path>, policy: ParsePolicy) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    load_from_reader(file, policy)
}

/// Load samples from any CSV source.
pub fn load_from_reader<R: io::Read>(reader: R, policy: ParsePolicy) -> Result<LoadReport, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut report = LoadReport::default();

    // Byte records so a field with invalid UTF-8 is a field issue, not a fatal read error.
    for rec in rdr.byte_records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        if rec.len() < 3 {
            return Err(LoadError::MissingFields { line, found: rec.len() });
        }

        let mut row_issues = Vec::new();
        let timestamp = parse_field(&rec[0], Field::Timestamp, line, sample::parse_timestamp, sample::zero_timestamp(), &mut row_issues);
        let direction = parse_field(&rec[1], Field::Direction, line, sample::parse_value, 0.0, &mut row_issues);
        let velocity = parse_field(&rec[2], Field::Velocity, line, sample::parse_value, 0.0, &mut row_issues);

        for issue in &row_issues {
            warn!("{}", issue);
        }

        match policy {
            ParsePolicy::Strict => {
                if let Some(first) = row_issues.into_iter().next() {
                    return Err(LoadError::InvalidField {
                        line: first.line,
                        field: first.field,
                        raw: first.raw,
                        reason: first.reason,
                    });
                }
            }
            ParsePolicy::Drop if !row_issues.is_empty() => {
                report.dropped += 1;
                report.issues.extend(row_issues);
                continue;
            }
            _ => report.issues.extend(row_issues),
        }

        report.samples.push(WindSample::new(timestamp, direction, velocity));
    }

    info!(
        "loaded {} samples ({} field issues, {} rows dropped)",
        report.samples.len(),
        report.issues.len(),
        report.dropped
    );
    Ok(report)
}

fn parse_field<T>(
    raw: &[u8],
    field: Field,
    line: u64,
    parse: impl FnOnce(&str) -> Result<T, String>,
    zero: T,
    issues: &mut Vec<FieldIssue>,
) -> T {
    let parsed = std::str::from_utf8(raw)
        .map_err(|e| e.to_string())
        .and_then(parse);
    match parsed {
        Ok(v) => v,
        Err(reason) => {
            let raw = String::from_utf8_lossy(raw).into_owned();
            issues.push(FieldIssue { line, field, raw, reason });
            zero
        }
    }
}
