//! Charts module - Chart configuration, mounting and rendering

mod board;
mod config;
mod plotter;
mod renderer;

pub use board::{
    ChartBoard, ChartHandle, RenderError, Surface, FUTURE_PREDICTION_CHART_ID,
    PREDICTED_CHART_ID, TRAIN_CHART_ID,
};
pub use config::{future_chart, predicted_chart, train_chart, ChartConfig, SeriesConfig};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
