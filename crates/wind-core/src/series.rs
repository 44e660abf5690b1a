// File: crates/wind-core/src/series.rs
// Summary: Coordinate mapper; turns samples into direction-vs-time and velocity-vs-time series.

use crate::sample::WindSample;

/// A plotted (value, time) pair. `time` is Unix epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub value: f64,
    pub time: f64,
}

impl SeriesPoint {
    /// As an `(x, y)` pair with the value on X and time on Y.
    #[inline]
    pub fn xy(&self) -> (f64, f64) { (self.value, self.time) }
}

/// Two parallel series, one point per sample each, in sample order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindSeries {
    pub direction: Vec<SeriesPoint>,
    pub velocity: Vec<SeriesPoint>,
}

impl WindSeries {
    pub fn len(&self) -> usize { self.direction.len() }
    pub fn is_empty(&self) -> bool { self.direction.is_empty() }

    /// Earliest and latest time across both series, or `None` when empty.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.direction
            .iter()
            .chain(self.velocity.iter())
            .map(|p| p.time)
            .fold(None, |acc, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })
    }
}

/// One-to-one remap; no filtering, sorting or rounding.
pub fn map_series(samples: &[WindSample]) -> WindSeries {
    let mut out = WindSeries {
        direction: Vec::with_capacity(samples.len()),
        velocity: Vec::with_capacity(samples.len()),
    };
    for s in samples {
        let time = s.unix_seconds() as f64;
        out.direction.push(SeriesPoint { value: s.direction, time });
        out.velocity.push(SeriesPoint { value: s.velocity, time });
    }
    out
}
