// File: crates/wind-chart/src/error.rs
// Summary: Chart construction and rendering errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has no points to draw")]
    EmptyChart,
    #[error("series {series:?} has a non-finite point at index {index}")]
    NonFinite { series: String, index: usize },
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    Readback,
}
