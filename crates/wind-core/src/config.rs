// File: crates/wind-core/src/config.rs
// Summary: Pipeline configuration (paths, canvas, labels, formats) with the stock defaults.

use std::path::PathBuf;

use crate::loader::ParsePolicy;

pub const DEFAULT_INPUT: &str = "wind_data_minute.csv";
pub const DEFAULT_OUTPUT: &str = "wind_waterfall_plot.png";

/// Points per inch; line widths are given in points.
const POINTS_PER_INCH: f64 = 72.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Canvas size in inches.
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub title: String,
    pub value_label: String,
    pub time_label: String,
    pub direction_label: String,
    pub velocity_label: String,
    /// chrono strftime pattern for time-axis ticks.
    pub time_format: String,
    pub line_width_pt: f64,
    /// Latest time at the bottom instead of the top.
    pub invert_time_axis: bool,
    pub parse_policy: ParsePolicy,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            width_in: 8.0,
            height_in: 10.0,
            dpi: 96.0,
            title: "Wind Direction and Velocity Over Time".to_string(),
            value_label: "Value (Direction or Velocity)".to_string(),
            time_label: "Time".to_string(),
            direction_label: "Wind Direction".to_string(),
            velocity_label: "Wind Velocity".to_string(),
            time_format: "%H:%M".to_string(),
            line_width_pt: 1.0,
            invert_time_axis: false,
            parse_policy: ParsePolicy::Impute,
        }
    }
}

impl PlotConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Canvas size in pixels, never below 1x1.
    pub fn canvas_px(&self) -> (i32, i32) {
        let px = |inches: f64| (inches * self.dpi).round().max(1.0) as i32;
        (px(self.width_in), px(self.height_in))
    }

    pub fn line_width_px(&self) -> f32 {
        (self.line_width_pt * self.dpi / POINTS_PER_INCH) as f32
    }
}
