//! Control Panel Widget
//! Left side panel with the data folder, export button and status.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel.
pub struct ControlPanel {
    pub data_dir: PathBuf,
    pub progress: f32,
    pub status: String,
    pub browse_enabled: bool,
    pub export_enabled: bool,
}

impl ControlPanel {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            progress: 0.0,
            status: "Ready".to_string(),
            browse_enabled: true,
            export_enabled: false,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 Occupancy Charts")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Folder Section =====
        ui.label(RichText::new("📁 Data Folder").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.data_dir_text()).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(self.browse_enabled, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseFolder;
                            }
                        });
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Complete") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Folder name shown in the data section.
    pub fn data_dir_text(&self) -> String {
        self.data_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.data_dir.display().to_string())
    }

    /// A load is running: both buttons stay disabled until it finishes.
    pub fn begin_loading(&mut self, data_dir: PathBuf) {
        self.data_dir = data_dir;
        self.browse_enabled = false;
        self.export_enabled = false;
        self.set_progress(10.0, "Loading data...");
    }

    /// The load finished; export needs at least one mounted chart.
    pub fn finish_loading(&mut self, mounted: usize) {
        self.browse_enabled = true;
        self.export_enabled = mounted > 0;
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseFolder,
    ExportPng,
}
