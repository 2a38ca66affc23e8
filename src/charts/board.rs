//! Chart Board Module
//! Named drawing surfaces that line charts are mounted onto.

use crate::charts::ChartConfig;
use thiserror::Error;
use tracing::{info, warn};

pub const TRAIN_CHART_ID: &str = "trainChart";
pub const PREDICTED_CHART_ID: &str = "predictedChart";
pub const FUTURE_PREDICTION_CHART_ID: &str = "futurePredictionChart";

/// Surfaces of the occupancy dashboard, in display order.
pub const DEFAULT_SURFACES: [&str; 3] = [
    TRAIN_CHART_ID,
    PREDICTED_CHART_ID,
    FUTURE_PREDICTION_CHART_ID,
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No drawing surface with id '{0}'")]
    SurfaceNotFound(String),
}

/// Returned by a successful mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub container_id: String,
    pub series_count: usize,
    pub point_count: usize,
}

/// A drawing surface and the chart currently mounted on it, if any.
#[derive(Debug, Clone)]
pub struct Surface {
    pub id: String,
    pub chart: Option<ChartConfig>,
}

/// Set of drawing surfaces addressed by id.
#[derive(Debug, Clone)]
pub struct ChartBoard {
    surfaces: Vec<Surface>,
}

impl Default for ChartBoard {
    fn default() -> Self {
        Self::with_default_surfaces()
    }
}

impl ChartBoard {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            surfaces: ids
                .iter()
                .map(|id| Surface {
                    id: id.to_string(),
                    chart: None,
                })
                .collect(),
        }
    }

    pub fn with_default_surfaces() -> Self {
        Self::new(&DEFAULT_SURFACES)
    }

    /// Mount a chart onto the surface named `container_id`.
    /// A chart already on that surface is replaced.
    pub fn render(
        &mut self,
        container_id: &str,
        config: ChartConfig,
    ) -> Result<ChartHandle, RenderError> {
        let surface = self
            .surfaces
            .iter_mut()
            .find(|s| s.id == container_id)
            .ok_or_else(|| RenderError::SurfaceNotFound(container_id.to_string()))?;

        if surface.chart.is_some() {
            warn!(surface = container_id, "Replacing chart already on surface");
        }

        let handle = ChartHandle {
            container_id: container_id.to_string(),
            series_count: config.series.len(),
            point_count: config.point_count(),
        };
        info!(
            surface = container_id,
            series = handle.series_count,
            points = handle.point_count,
            "Chart rendered"
        );

        surface.chart = Some(config);
        Ok(handle)
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn chart(&self, container_id: &str) -> Option<&ChartConfig> {
        self.surfaces
            .iter()
            .find(|s| s.id == container_id)
            .and_then(|s| s.chart.as_ref())
    }

    /// Mounted charts with their surface ids, in surface order.
    pub fn mounted(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.surfaces
            .iter()
            .filter_map(|s| s.chart.as_ref().map(|c| (s.id.as_str(), c)))
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted().count()
    }

    /// Unmount every chart, keeping the surfaces.
    pub fn clear(&mut self) {
        for surface in &mut self.surfaces {
            surface.chart = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{future_chart, train_chart};
    use crate::data::Series;

    fn one_point() -> Series {
        Series {
            labels: vec!["Day 1, Hour 0".to_string()],
            values: vec![Some(5.0)],
        }
    }

    #[test]
    fn default_board_has_three_empty_surfaces() {
        let board = ChartBoard::default();
        let ids: Vec<_> = board.surfaces().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["trainChart", "predictedChart", "futurePredictionChart"]);
        assert_eq!(board.mounted_count(), 0);
    }

    #[test]
    fn render_mounts_on_named_surface() {
        let mut board = ChartBoard::default();
        let handle = board.render(TRAIN_CHART_ID, train_chart(&one_point())).unwrap();

        assert_eq!(
            handle,
            ChartHandle {
                container_id: "trainChart".to_string(),
                series_count: 1,
                point_count: 1,
            }
        );
        assert!(board.chart(TRAIN_CHART_ID).is_some());
        assert!(board.chart(PREDICTED_CHART_ID).is_none());
    }

    #[test]
    fn unknown_surface_is_an_error() {
        let mut board = ChartBoard::new(&[TRAIN_CHART_ID]);
        let err = board
            .render(FUTURE_PREDICTION_CHART_ID, future_chart(&one_point()))
            .unwrap_err();
        assert!(matches!(err, RenderError::SurfaceNotFound(ref id) if id == "futurePredictionChart"));
        assert_eq!(board.mounted_count(), 0);
    }

    #[test]
    fn second_render_replaces() {
        let mut board = ChartBoard::default();
        board.render(TRAIN_CHART_ID, train_chart(&one_point())).unwrap();
        board.render(TRAIN_CHART_ID, train_chart(&Series::default())).unwrap();

        assert_eq!(board.mounted_count(), 1);
        assert!(board.chart(TRAIN_CHART_ID).unwrap().labels.is_empty());
    }

    #[test]
    fn clear_unmounts_everything() {
        let mut board = ChartBoard::default();
        board.render(TRAIN_CHART_ID, train_chart(&one_point())).unwrap();
        board.clear();
        assert_eq!(board.mounted_count(), 0);
        assert_eq!(board.surfaces().len(), 3);
    }
}
