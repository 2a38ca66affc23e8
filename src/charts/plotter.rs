//! Chart Plotter Module
//! Draws mounted line charts interactively using egui_plot.

use crate::charts::config::{ChartConfig, Rgb, LINE_WIDTH};
use egui::{Color32, Vec2};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, VLine};

const WHEEL_ZOOM_SPEED: f32 = 0.002;
const CROSSHAIR_COLOR: Color32 = Color32::from_gray(140);

/// Creates interactive line charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(rgb: Rgb) -> Color32 {
        Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Category tick text: the label for ticks sitting on an index, blank otherwise.
    pub fn tick_label(config: &ChartConfig, value: f64) -> String {
        if (value - value.round()).abs() > 1e-6 {
            return String::new();
        }
        config.label_at(value).unwrap_or_default().to_string()
    }

    /// Hover text: every series at the hovered index, wherever the pointer is
    /// over the plot.
    pub fn hover_text(config: &ChartConfig, x: f64) -> String {
        config.index_tooltip(x).unwrap_or_default()
    }

    /// Draw one line chart with legend, axis titles, x pan/zoom and an index crosshair.
    pub fn draw_line_chart(ui: &mut egui::Ui, id: &str, config: &ChartConfig, height: f32) {
        let point_count = config.point_count();
        let last_index = point_count.saturating_sub(1) as f64;

        let tick_config = config.clone();
        let hover_config = config.clone();

        let plot = Plot::new(format!("line_{}", id))
            .height(height)
            .width(ui.available_width())
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(config.x_title.clone())
            .y_axis_label(config.y_title.clone())
            .allow_drag([true, false])
            .allow_zoom([true, false])
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(0.0)
            .include_x(last_index)
            .x_axis_formatter(move |mark, _range| Self::tick_label(&tick_config, mark.value))
            .label_formatter(move |_name, value| Self::hover_text(&hover_config, value.x));

        plot.show(ui, |plot_ui| {
            for series in &config.series {
                let color = Self::color(series.color);
                // One line per contiguous run; equal names share a legend entry.
                for segment in series.segments(point_count) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(segment))
                            .color(color)
                            .width(LINE_WIDTH)
                            .name(&series.name),
                    );
                }
            }

            if let Some(pointer) = plot_ui.pointer_coordinate() {
                if config.label_at(pointer.x).is_some() {
                    plot_ui.vline(VLine::new(pointer.x.round()).color(CROSSHAIR_COLOR));
                }
            }

            if plot_ui.response().hovered() {
                let scroll = plot_ui.ctx().input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    let factor = (scroll * WHEEL_ZOOM_SPEED).exp();
                    plot_ui.zoom_bounds_around_hovered(Vec2::new(factor, 1.0));
                    // Keep the surrounding scroll area still while zooming.
                    plot_ui.ctx().input_mut(|i| i.smooth_scroll_delta.y = 0.0);
                }
            }
        });
    }
}
