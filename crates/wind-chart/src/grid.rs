// File: crates/wind-chart/src/grid.rs
// Summary: Tick layout helpers for numeric and time axes.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round step for a numeric span: 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    mult * mag
}

/// Step in seconds that lands ticks on whole minutes/hours/days.
pub fn time_step(span_secs: f64, target: usize) -> f64 {
    const STEPS: [f64; 14] = [
        1.0, 5.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0, 3600.0, 7200.0, 21600.0, 43200.0,
    ];
    let raw = span_secs.abs() / target.max(1) as f64;
    for s in STEPS {
        if raw <= s { return s; }
    }
    let days = (raw / 86400.0).ceil().max(1.0);
    days * 86400.0
}

/// Multiples of `step` inside `[min, max]`.
pub fn ticks_with_step(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !min.is_finite() || !max.is_finite() || max < min { return Vec::new(); }
    let (first, last) = ((min / step).ceil(), (max / step).floor());
    // tick indices must fit in i64 or the casts saturate
    if first < i64::MIN as f64 || last >= i64::MAX as f64 { return Vec::new(); }
    if last - first > 1_000.0 { return linspace(min, max, 2); }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}
