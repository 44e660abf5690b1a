// File: crates/wind-plot/src/plot.rs
// Summary: Boundary between the core series and the chart renderer.

use wind_chart::{Axis, Chart, Insets, RenderOptions, Series, Theme};
use wind_core::{PlotConfig, SeriesPoint, WindSeries};

/// Palette slots for the two lines (green, blue).
const DIRECTION_COLOR: usize = 1;
const VELOCITY_COLOR: usize = 2;

fn xy(points: &[SeriesPoint]) -> Vec<(f64, f64)> {
    points.iter().map(SeriesPoint::xy).collect()
}

/// Value on X, time on Y; both lines share one value axis.
pub fn build_chart(series: &WindSeries, cfg: &PlotConfig, theme: &Theme) -> Chart {
    let stroke = cfg.line_width_px();
    let mut chart = Chart::new().with_title(cfg.title.clone());
    chart.x_axis = Axis::new(cfg.value_label.clone(), 0.0, 1.0);
    chart.y_axis = Axis::time(cfg.time_label.clone(), 0.0, 1.0, cfg.time_format.clone())
        .with_inverted(cfg.invert_time_axis);
    chart.add_series(
        Series::line(cfg.direction_label.clone(), xy(&series.direction))
            .with_color(theme.series_color(DIRECTION_COLOR))
            .with_stroke_width(stroke),
    );
    chart.add_series(
        Series::line(cfg.velocity_label.clone(), xy(&series.velocity))
            .with_color(theme.series_color(VELOCITY_COLOR))
            .with_stroke_width(stroke),
    );
    chart.autoscale_axes(0.02);
    chart
}

pub fn render_options(cfg: &PlotConfig, theme: Theme) -> RenderOptions {
    let (width, height) = cfg.canvas_px();
    RenderOptions { width, height, insets: Insets::default(), theme, draw_labels: true, draw_legend: true }
}
