// File: crates/wind-plot/src/main.rs
// Summary: Loads the wind CSV, maps it to direction/velocity series and renders the waterfall PNG.

mod plot;

use anyhow::{Context, Result};
use log::{info, warn};
use wind_chart::Theme;
use wind_core::{load_from_path, map_series, PlotConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&PlotConfig::default())
}

fn run(cfg: &PlotConfig) -> Result<()> {
    let report = load_from_path(&cfg.input_path, cfg.parse_policy)
        .with_context(|| format!("failed to load CSV '{}'", cfg.input_path.display()))?;
    if !report.is_clean() {
        warn!("{} fields in {} could not be parsed", report.issues.len(), cfg.input_path.display());
    }

    let series = map_series(&report.samples);
    info!("mapped {} points per series", series.len());

    let theme = Theme::light();
    let chart = plot::build_chart(&series, cfg, &theme);
    let opts = plot::render_options(cfg, theme);
    chart
        .render_to_png(&opts, &cfg.output_path)
        .with_context(|| format!("failed to render '{}'", cfg.output_path.display()))?;

    println!("Plot saved as {}", cfg.output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn out_dir() -> PathBuf {
        let dir = PathBuf::from("target/test_out/wind-plot");
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn pipeline_writes_png() {
        let dir = out_dir();
        let input = dir.join("wind_data_minute.csv");
        std::fs::write(
            &input,
            "timestamp,direction,velocity\n\
             2024-01-01 00:00:00,90.0,5.2\n\
             2024-01-01 00:01:00,95.5,5.8\n\
             2024-01-01 00:02:00,bad,6.1\n",
        )
        .unwrap();
        let output = dir.join("wind_waterfall_plot.png");
        let _ = std::fs::remove_file(&output);

        run(&PlotConfig::default().with_input(&input).with_output(&output)).expect("pipeline");
        let bytes = std::fs::read(&output).expect("png written");
        assert!(bytes.starts_with(&[137, 80, 78, 71]));
    }

    #[test]
    fn missing_input_is_fatal() {
        let dir = out_dir();
        let output = dir.join("never.png");
        let cfg = PlotConfig::default().with_input(dir.join("missing.csv")).with_output(&output);
        let err = run(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("missing.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn header_only_input_fails_at_render() {
        let dir = out_dir();
        let input = dir.join("header_only.csv");
        std::fs::write(&input, "timestamp,direction,velocity\n").unwrap();
        let cfg = PlotConfig::default().with_input(&input).with_output(dir.join("empty.png"));
        assert!(run(&cfg).is_err());
    }
}
