// File: crates/wind-chart/src/series.rs
// Summary: Labeled line series of (x, y) points.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Stroke color; `None` picks from the theme palette by series index.
    pub color: Option<skia::Color>,
    pub stroke_width: f32,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, color: None, stroke_width: 1.5 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.1);
        self
    }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Index of the first point with a NaN or infinite coordinate.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.data_xy.iter().position(|&(x, y)| !x.is_finite() || !y.is_finite())
    }

    /// (x_min, x_max, y_min, y_max) over all points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter();
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}
