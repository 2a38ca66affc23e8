//! Chart Viewer Widget
//! Scrollable stack of drawing surfaces, each showing its mounted line chart.

use crate::charts::{
    ChartBoard, ChartPlotter, Surface, FUTURE_PREDICTION_CHART_ID, PREDICTED_CHART_ID,
    TRAIN_CHART_ID,
};
use egui::{Color32, RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 320.0;

/// Displays the charts mounted on a board. Empty surfaces are not drawn.
#[derive(Default)]
pub struct ChartViewer {
    pub board: ChartBoard,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.board.clear();
    }

    pub fn set_board(&mut self, board: ChartBoard) {
        self.board = board;
    }

    /// Heading shown above a surface.
    pub fn surface_title(id: &str) -> &str {
        match id {
            TRAIN_CHART_ID => "Train Data",
            PREDICTED_CHART_ID => "Predicted vs Train Data",
            FUTURE_PREDICTION_CHART_ID => "Future Predictions",
            other => other,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.board.mounted_count() == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for surface in self.board.surfaces() {
                    if surface.chart.is_some() {
                        Self::draw_surface(ui, surface);
                        ui.add_space(CHART_SPACING);
                    }
                }
            });
    }

    fn draw_surface(ui: &mut egui::Ui, surface: &Surface) {
        let Some(chart) = &surface.chart else {
            return;
        };

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(90)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(Self::surface_title(&surface.id))
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(8.0);
                ChartPlotter::draw_line_chart(ui, &surface.id, chart, CHART_HEIGHT);
            });
    }
}
