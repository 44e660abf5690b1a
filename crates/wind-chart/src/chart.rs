// File: crates/wind-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster -> RGBA8 -> PNG).

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::error::ChartError;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text. Off gives font-independent output.
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_legend: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

/// Plot area in pixels.
#[derive(Clone, Copy, Debug)]
struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn sx(&self, axis: &Axis, x: f64) -> f32 { self.l + axis.fraction(x) as f32 * (self.r - self.l) }
    fn sy(&self, axis: &Axis, y: f64) -> f32 { self.b - axis.fraction(y) as f32 * (self.b - self.t) }
    fn as_rect(&self) -> skia::Rect { skia::Rect::from_ltrb(self.l, self.t, self.r, self.b) }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding each span by `margin` (fraction of the span).
    /// Degenerate spans widen to one unit. Leaves the axes untouched when there is no data.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let Some((x_min, mut x_max, y_min, mut y_max)) = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
        else {
            return;
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Reject charts with nothing to draw or with NaN/infinite coordinates.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.series.iter().all(Series::is_empty) {
            return Err(ChartError::EmptyChart);
        }
        for s in &self.series {
            if let Some(index) = s.first_non_finite() {
                return Err(ChartError::NonFinite { series: s.label.clone(), index });
            }
        }
        Ok(())
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.validate()?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Readback.into());
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };
        let text = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, theme);
        draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, theme, text.as_ref());

        canvas.save();
        canvas.clip_rect(plot.as_rect(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, color);
        }
        canvas.restore();

        if opts.draw_legend {
            draw_legend(canvas, &plot, &self.series, theme, text.as_ref());
        }

        if let Some(text) = &text {
            if !self.title.is_empty() {
                text.draw_centered(canvas, &self.title, (plot.l + plot.r) * 0.5, plot.t - 18.0, 16.0, theme.axis_label);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

const TICK_LEN: f32 = 5.0;
const LABEL_SIZE: f32 = 12.0;

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for tx in x.ticks() {
        let px = plot.sx(x, tx);
        canvas.draw_line((px, plot.t), (px, plot.b), &paint);
    }
    // horizontals
    for ty in y.ticks() {
        let py = plot.sy(y, ty);
        canvas.draw_line((plot.l, py), (plot.r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, x: &Axis, y: &Axis, theme: &Theme, text: Option<&TextShaper>) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    // X and Y axis lines
    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis_paint);

    let mut tick_paint = axis_paint.clone();
    tick_paint.set_color(theme.tick);

    let x_ticks = x.ticks();
    let y_ticks = y.ticks();
    for &tx in &x_ticks {
        let px = plot.sx(x, tx);
        canvas.draw_line((px, plot.b), (px, plot.b + TICK_LEN), &tick_paint);
    }
    for &ty in &y_ticks {
        let py = plot.sy(y, ty);
        canvas.draw_line((plot.l - TICK_LEN, py), (plot.l, py), &tick_paint);
    }

    let Some(text) = text else { return };
    for &tx in &x_ticks {
        let px = plot.sx(x, tx);
        text.draw_centered(canvas, &x.tick_label(tx), px, plot.b + TICK_LEN + 14.0, LABEL_SIZE, theme.tick);
    }
    for &ty in &y_ticks {
        let py = plot.sy(y, ty);
        text.draw_right(canvas, &y.tick_label(ty), plot.l - TICK_LEN - 4.0, py + LABEL_SIZE * 0.4, LABEL_SIZE, theme.tick, true);
    }

    text.draw_centered(canvas, &x.label, (plot.l + plot.r) * 0.5, plot.b + 44.0, 14.0, theme.axis_label);
    text.draw_vertical(canvas, &y.label, 16.0, (plot.t + plot.b) * 0.5, 14.0, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, plot: &PlotRect, x_axis: &Axis, y_axis: &Axis, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((plot.sx(x_axis, x0), plot.sy(y_axis, y0)));

    for &(x, y) in data.iter().skip(1) {
        path.line_to((plot.sx(x_axis, x), plot.sy(y_axis, y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

/// Legend box in the top-right corner of the plot: one swatch per series, label beside it.
fn draw_legend(canvas: &skia::Canvas, plot: &PlotRect, series: &[Series], theme: &Theme, text: Option<&TextShaper>) {
    if series.is_empty() {
        return;
    }
    const ROW_H: f32 = 18.0;
    const SWATCH_W: f32 = 24.0;
    const PAD: f32 = 8.0;

    let label_w = text
        .map(|t| series.iter().map(|s| t.measure_width(&s.label, LABEL_SIZE, false)).fold(0.0, f32::max))
        .unwrap_or(0.0);
    let box_w = PAD * 3.0 + SWATCH_W + label_w;
    let box_h = PAD * 2.0 + ROW_H * series.len() as f32;
    let right = plot.r - PAD;
    let top = plot.t + PAD;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_rect(frame, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(frame, &border);

    for (i, s) in series.iter().enumerate() {
        let cy = top + PAD + ROW_H * (i as f32 + 0.5);
        let sx = frame.left + PAD;
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_stroke_width(s.stroke_width.max(2.0));
        swatch.set_color(s.color.unwrap_or_else(|| theme.series_color(i)));
        canvas.draw_line((sx, cy), (sx + SWATCH_W, cy), &swatch);

        if let Some(t) = text {
            t.draw_left(canvas, &s.label, sx + SWATCH_W + PAD, cy + LABEL_SIZE * 0.4, LABEL_SIZE, theme.axis_label, false);
        }
    }
}
