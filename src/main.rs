//! Occupancy Charts - Historical, predicted and forecast occupancy viewer
//!
//! Loads three JSON datasets and shows them as interactive line charts, or
//! exports the charts as PNG files.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;
#[cfg(test)]
mod test_utils;

use anyhow::anyhow;
use charts::ChartBoard;
use clap::Parser;
use config::AppConfig;
use data::{DataLoader, DirSource};
use eframe::egui;
use gui::OccupancyApp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "occupancy_charts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::parse();
    info!(data_dir = %config.data_dir.display(), "Occupancy Charts starting up");

    if let Some(out_dir) = &config.export {
        let loader = DataLoader::new(DirSource::new(&config.data_dir));
        let mut board = ChartBoard::default();
        let outcome =
            pipeline::export(&loader, &mut board, out_dir, config.width, config.height)?;
        for path in &outcome.paths {
            println!("{}", path.display());
        }
        if !outcome.completed {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Occupancy Charts"),
        ..Default::default()
    };

    let data_dir = config.data_dir.clone();
    eframe::run_native(
        "Occupancy Charts",
        options,
        Box::new(move |cc| Ok(Box::new(OccupancyApp::new(cc, data_dir)))),
    )
    .map_err(|e| anyhow!("Failed to run window: {}", e))
}
