//! Chart Pipeline
//! Load the three datasets, shape them into series and mount the charts.

use crate::charts::{
    future_chart, predicted_chart, train_chart, ChartBoard, ChartHandle, RenderError,
    StaticChartRenderer, FUTURE_PREDICTION_CHART_ID, PREDICTED_CHART_ID, TRAIN_CHART_ID,
};
use crate::data::{DataLoader, DataProcessor, LoaderError, ResourceSource};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum LoadOrProcessError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to start runtime: {0}")]
    Runtime(std::io::Error),
}

/// Run the whole pipeline against `board`.
///
/// Charts are mounted in order train, predicted, future. A failure stops the
/// run where it happens; charts mounted before it stay on the board.
pub async fn run<S: ResourceSource>(
    loader: &DataLoader<S>,
    board: &mut ChartBoard,
) -> Result<Vec<ChartHandle>, LoadOrProcessError> {
    let data = loader.load_all().await?;

    let predicted = DataProcessor::process_predicted(&data.predicted);
    let train = DataProcessor::process_train(&data.train);

    let mut handles = Vec::with_capacity(3);
    handles.push(board.render(TRAIN_CHART_ID, train_chart(&train))?);
    handles.push(board.render(PREDICTED_CHART_ID, predicted_chart(&predicted, &train))?);

    let future = DataProcessor::process_future_prediction(&data.future);
    handles.push(board.render(FUTURE_PREDICTION_CHART_ID, future_chart(&future))?);

    Ok(handles)
}

/// `run` on a fresh single-threaded runtime, for callers outside async code.
pub fn run_blocking<S: ResourceSource>(
    loader: &DataLoader<S>,
    board: &mut ChartBoard,
) -> Result<Vec<ChartHandle>, LoadOrProcessError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(LoadOrProcessError::Runtime)?;
    runtime.block_on(run(loader, board))
}

/// Log a pipeline failure and return the logged message.
pub fn report(err: &LoadOrProcessError) -> String {
    let message = format!("Error loading or processing data: {}", err);
    error!("{}", message);
    message
}

/// Result of a headless export.
#[derive(Debug)]
pub struct ExportOutcome {
    /// Whether the pipeline ran to the end.
    pub completed: bool,
    pub paths: Vec<PathBuf>,
}

/// Headless mode: run the pipeline onto `board`, then write every mounted
/// chart to `out_dir`. Charts mounted before a pipeline failure are still
/// written; the failure is reported once.
pub fn export<S: ResourceSource>(
    loader: &DataLoader<S>,
    board: &mut ChartBoard,
    out_dir: &Path,
    width: u32,
    height: u32,
) -> anyhow::Result<ExportOutcome> {
    let completed = match run_blocking(loader, board) {
        Ok(handles) => {
            for handle in &handles {
                debug!(surface = %handle.container_id, points = handle.point_count, "Chart ready");
            }
            true
        }
        Err(err) => {
            report(&err);
            false
        }
    };

    let paths = StaticChartRenderer::export_board(board, out_dir, width, height)?;
    Ok(ExportOutcome { completed, paths })
}
