// File: crates/wind-chart/src/lib.rs
// Summary: Chart library entry point; exports the API for building and rendering line charts.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, TickFormat};
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
