//! Static Chart Renderer
//! Writes mounted charts to PNG files with plotters.
//!
//! Layout per image:
//! 1. Legend strip on top: colored swatch + series name
//! 2. Line chart with category labels on x, axis titles, one line per series

use crate::charts::config::LINE_WIDTH;
use crate::charts::{ChartBoard, ChartConfig};
use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

const LEGEND_HEIGHT: u32 = 40;
const FONT: &str = "sans-serif";
const MAX_X_LABELS: usize = 8;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Output file for a surface.
    pub fn file_path(dir: &Path, container_id: &str) -> PathBuf {
        dir.join(format!("{}.png", container_id))
    }

    /// Render every mounted chart into `dir`, one PNG per surface.
    pub fn export_board(
        board: &ChartBoard,
        dir: &Path,
        width: u32,
        height: u32,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

        let jobs: Vec<(&str, &ChartConfig)> = board.mounted().collect();
        let paths = jobs
            .par_iter()
            .map(|(id, config)| {
                let path = Self::file_path(dir, id);
                Self::render_png(config, &path, width, height)
                    .with_context(|| format!("Failed to export chart '{}'", id))?;
                Ok(path)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(count = paths.len(), dir = %dir.display(), "Exported charts");
        Ok(paths)
    }

    /// Draw one chart to a PNG file.
    pub fn render_png(config: &ChartConfig, path: &Path, width: u32, height: u32) -> Result<()> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (legend_area, plot_area) = root.split_vertically(LEGEND_HEIGHT);
        Self::draw_legend(&legend_area, config)?;

        let n = config.point_count().max(1);
        let (y_min, y_max) = Self::y_range(config);

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0usize..n, y_min..y_max)
            .map_err(draw_err)?;

        let labels = &config.labels;
        let x_formatter = |x: &usize| labels.get(*x).cloned().unwrap_or_default();

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.min(MAX_X_LABELS))
            .x_label_formatter(&x_formatter)
            .x_desc(config.x_title.as_str())
            .y_desc(config.y_title.as_str())
            .label_style((FONT, 13).into_font())
            .axis_desc_style((FONT, 15).into_font())
            .draw()
            .map_err(draw_err)?;

        for series in &config.series {
            let color = Self::color(series);
            let style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH as u32);

            for segment in series.segments(config.point_count()) {
                let points = segment.iter().map(|p| (p[0] as usize, p[1]));
                chart
                    .draw_series(LineSeries::new(points, style))
                    .map_err(draw_err)?;
            }
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }

    fn draw_legend<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        config: &ChartConfig,
    ) -> Result<()> {
        let (width, _) = area.dim_in_pixel();
        let font = (FONT, 16).into_font();

        // Approximate text widths to center the strip.
        let entry_widths: Vec<i32> = config
            .series
            .iter()
            .map(|s| 40 + s.name.chars().count() as i32 * 8 + 20)
            .collect();
        let total: i32 = entry_widths.iter().sum();
        let mut x = ((width as i32 - total) / 2).max(10);

        for (series, entry_width) in config.series.iter().zip(entry_widths) {
            let color = Self::color(series);
            area.draw(&Rectangle::new([(x, 14), (x + 32, 26)], color.filled()))
                .map_err(draw_err)?;
            area.draw(&Text::new(series.name.clone(), (x + 40, 12), font.clone()))
                .map_err(draw_err)?;
            x += entry_width;
        }
        Ok(())
    }

    fn y_range(config: &ChartConfig) -> (f64, f64) {
        match config.value_range() {
            Some((lo, hi)) => {
                let pad = ((hi - lo) * 0.1).max(1.0);
                (lo - pad, hi + pad)
            }
            None => (0.0, 1.0),
        }
    }

    fn color(series: &crate::charts::SeriesConfig) -> RGBColor {
        RGBColor(series.color.0, series.color.1, series.color.2)
    }
}

fn draw_err<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("Chart drawing failed: {}", err)
}
