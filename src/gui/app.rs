//! Occupancy Charts Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{ChartBoard, StaticChartRenderer};
use crate::data::{DataLoader, DirSource};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::pipeline;
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info};

const EXPORT_WIDTH: u32 = 1200;
const EXPORT_HEIGHT: u32 = 600;

/// Pipeline result from the background thread. The board holds whatever was
/// mounted, including charts mounted before a failure.
struct LoadOutcome {
    board: ChartBoard,
    error: Option<String>,
}

/// Main application window.
pub struct OccupancyApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async pipeline run
    load_rx: Option<Receiver<LoadOutcome>>,
    is_loading: bool,
}

impl OccupancyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(data_dir.clone()),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load(data_dir);
        app
    }

    /// Run the pipeline for `data_dir` on a background thread.
    fn start_load(&mut self, data_dir: PathBuf) {
        if self.is_loading {
            return;
        }

        self.chart_viewer.clear();
        self.control_panel.begin_loading(data_dir.clone());
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let loader = DataLoader::new(DirSource::new(data_dir));
            let mut board = ChartBoard::default();
            let error = pipeline::run_blocking(&loader, &mut board)
                .err()
                .map(|err| pipeline::report(&err));
            let _ = tx.send(LoadOutcome { board, error });
        });
    }

    /// Handle data folder selection
    fn handle_browse_folder(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.control_panel.data_dir)
            .pick_folder()
        {
            self.start_load(dir);
        }
    }

    /// Check for pipeline results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadOutcome { board, error }) => {
                let count = board.mounted_count();
                self.chart_viewer.set_board(board);
                self.control_panel.finish_loading(count);
                match error {
                    None => self
                        .control_panel
                        .set_progress(100.0, &format!("Complete! {} charts ready", count)),
                    Some(message) => self.control_panel.set_progress(0.0, &message),
                }
                self.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel.finish_loading(0);
                self.control_panel
                    .set_progress(0.0, "Error: loader thread stopped unexpectedly");
                self.is_loading = false;
            }
        }
    }

    /// Handle PNG export of the mounted charts
    fn handle_export_png(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        self.control_panel.set_progress(50.0, "Rendering charts...");

        match StaticChartRenderer::export_board(
            &self.chart_viewer.board,
            &dir,
            EXPORT_WIDTH,
            EXPORT_HEIGHT,
        ) {
            Ok(paths) => {
                self.control_panel.set_progress(
                    100.0,
                    &format!("Complete! Exported {} charts", paths.len()),
                );
                if let Err(e) = open::that(&dir) {
                    info!("Could not open export folder: {}", e);
                }
            }
            Err(e) => {
                error!("PNG export failed: {:#}", e);
                self.control_panel
                    .set_progress(0.0, &format!("Error: {:#}", e));
            }
        }
    }
}

impl eframe::App for OccupancyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::BrowseFolder => self.handle_browse_folder(),
                    ControlPanelAction::ExportPng => self.handle_export_png(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
