// File: crates/wind-core/src/lib.rs
// Summary: Core library entry point; CSV loading and coordinate mapping for wind time series.

pub mod config;
pub mod error;
pub mod loader;
pub mod sample;
pub mod series;

pub use config::PlotConfig;
pub use error::LoadError;
pub use loader::{load_from_path, load_from_reader, LoadReport, ParsePolicy};
pub use sample::{Field, FieldIssue, WindSample};
pub use series::{map_series, SeriesPoint, WindSeries};
