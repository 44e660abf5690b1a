// File: crates/wind-chart/src/axis.rs
// Summary: Axis model with labels, ranges and tick label formatting.

use chrono::DateTime;

use crate::grid::{nice_step, ticks_with_step, time_step};

/// How tick values are printed.
#[derive(Clone, Debug, PartialEq)]
pub enum TickFormat {
    Number,
    /// Values are Unix seconds, printed with a chrono strftime pattern in UTC.
    Time(String),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
    /// Max on the near edge (bottom/left) instead of min.
    pub inverted: bool,
    /// Approximate number of ticks to aim for.
    pub target_ticks: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Number, inverted: false, target_ticks: 6 }
    }

    /// Time axis; values are Unix seconds.
    pub fn time(label: impl Into<String>, min: f64, max: f64, pattern: impl Into<String>) -> Self {
        Self { format: TickFormat::Time(pattern.into()), target_ticks: 8, ..Self::new(label, min, max) }
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn default_x() -> Self { Self::new("Value", 0.0, 10.0) }

    pub fn default_y() -> Self { Self::time("Time", 0.0, 3600.0, "%H:%M") }

    #[inline]
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Fraction of the way from `min` to `max`, honoring `inverted`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        let f = (v - self.min) / self.span();
        if self.inverted { 1.0 - f } else { f }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let step = match self.format {
            TickFormat::Number => nice_step(self.max - self.min, self.target_ticks),
            TickFormat::Time(_) => time_step(self.max - self.min, self.target_ticks),
        };
        ticks_with_step(self.min, self.max, step)
    }

    pub fn tick_label(&self, v: f64) -> String {
        match &self.format {
            TickFormat::Time(pattern) => DateTime::from_timestamp(v.round() as i64, 0)
                .map(|t| t.format(pattern).to_string())
                .unwrap_or_default(),
            TickFormat::Number => {
                let span = (self.max - self.min).abs();
                if span >= 10.0 {
                    format!("{:.0}", v)
                } else if span >= 1.0 {
                    format!("{:.1}", v)
                } else {
                    format!("{:.2}", v)
                }
            }
        }
    }
}
