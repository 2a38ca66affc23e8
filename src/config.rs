//! Command line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "occupancy-charts")]
#[command(about = "Occupancy history, prediction and forecast charts", long_about = None)]
pub struct AppConfig {
    /// Directory holding predicted_data.json, train_data.json and future_predictions.json
    #[arg(long, env = "OCCUPANCY_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Render the charts as PNG files into this directory and exit instead of opening a window
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Exported image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Exported image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
