//! Chart Configuration Module
//! Backend-independent description of a line chart: labels, styled series
//! and axis titles. Every chart shares the same presentation: 2px unfilled
//! lines, legend on top, x-only pan/zoom and index tooltips.

use crate::data::Series;

/// Plain RGB color, converted to egui or plotters colors at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const TRAIN_RED: Rgb = Rgb(255, 99, 132);
pub const PREDICTED_TEAL: Rgb = Rgb(75, 192, 192);
pub const TRAIN_BLUE: Rgb = Rgb(54, 162, 235);
pub const FUTURE_GREEN: Rgb = Rgb(0, 128, 0);

pub const TIME_AXIS_TITLE: &str = "Time (Day and Hour)";
pub const TRAIN_SERIES_NAME: &str = "Train Data (Occupancy)";
pub const PREDICTED_SERIES_NAME: &str = "Predicted Values";
pub const FUTURE_SERIES_NAME: &str = "Future Predicted Occupancy";

pub const LINE_WIDTH: f32 = 2.0;

/// One named line.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub color: Rgb,
}

impl SeriesConfig {
    /// Contiguous runs of present values as `[index, value]` points, limited
    /// to the first `point_count` indexes. A missing value ends the current run.
    pub fn segments(&self, point_count: usize) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for (i, value) in self.values.iter().take(point_count).enumerate() {
            match value {
                Some(v) if v.is_finite() => current.push([i as f64, *v]),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

/// A line chart over a categorical time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub series: Vec<SeriesConfig>,
    pub x_title: String,
    pub y_title: String,
}

impl ChartConfig {
    /// Empty line chart over `labels` with the time axis title.
    pub fn line(labels: Vec<String>, y_title: &str) -> Self {
        Self {
            labels,
            series: Vec::new(),
            x_title: TIME_AXIS_TITLE.to_string(),
            y_title: y_title.to_string(),
        }
    }

    pub fn with_series(mut self, name: &str, values: Vec<Option<f64>>, color: Rgb) -> Self {
        self.series.push(SeriesConfig {
            name: name.to_string(),
            values,
            color,
        });
        self
    }

    /// Number of x positions. The axis spans the labels only; values past
    /// the last label are not plotted.
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Label for an x coordinate, rounded to the nearest index.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if !x.is_finite() || x < -0.5 {
            return None;
        }
        self.labels.get(x.round() as usize).map(String::as_str)
    }

    /// Minimum and maximum over the present values on the label axis.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let n = self.point_count();
        let mut range: Option<(f64, f64)> = None;
        for v in self
            .series
            .iter()
            .flat_map(|s| s.values.iter().take(n).flatten())
            .filter(|v| v.is_finite())
        {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(*v), hi.max(*v)),
                None => (*v, *v),
            });
        }
        range
    }

    /// Tooltip text for the hovered x index: the label followed by each
    /// series' value at that index.
    pub fn index_tooltip(&self, x: f64) -> Option<String> {
        let label = self.label_at(x)?;
        let idx = x.round() as usize;

        let mut text = label.to_string();
        for series in &self.series {
            if let Some(Some(v)) = series.values.get(idx) {
                text.push_str(&format!("\n{}: {}", series.name, v));
            }
        }
        Some(text)
    }
}

/// Historical occupancy.
pub fn train_chart(train: &Series) -> ChartConfig {
    ChartConfig::line(train.labels.clone(), "Occupancy").with_series(
        TRAIN_SERIES_NAME,
        train.values.clone(),
        TRAIN_RED,
    )
}

/// Predicted values against observed occupancy on the predicted label axis.
/// Train values are plotted by index, not matched by label.
pub fn predicted_chart(predicted: &Series, train: &Series) -> ChartConfig {
    ChartConfig::line(predicted.labels.clone(), "Values")
        .with_series(
            PREDICTED_SERIES_NAME,
            predicted.values.clone(),
            PREDICTED_TEAL,
        )
        .with_series(TRAIN_SERIES_NAME, train.values.clone(), TRAIN_BLUE)
}

/// Forward-looking forecast.
pub fn future_chart(future: &Series) -> ChartConfig {
    ChartConfig::line(future.labels.clone(), "Predicted Occupancy").with_series(
        FUTURE_SERIES_NAME,
        future.values.clone(),
        FUTURE_GREEN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, Option<f64>)]) -> Series {
        Series {
            labels: points.iter().map(|(l, _)| l.to_string()).collect(),
            values: points.iter().map(|(_, v)| *v).collect(),
        }
    }

    #[test]
    fn train_chart_is_single_red_series() {
        let chart = train_chart(&series(&[("Day 1, Hour 0", Some(5.0))]));

        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Train Data (Occupancy)");
        assert_eq!(chart.series[0].color, Rgb(255, 99, 132));
        assert_eq!(chart.y_title, "Occupancy");
        assert_eq!(chart.x_title, "Time (Day and Hour)");
    }

    #[test]
    fn predicted_chart_uses_predicted_labels_and_two_series() {
        let predicted = series(&[("Day 2, Hour 3", Some(42.0))]);
        let train = series(&[("Day 1, Hour 0", Some(5.0)), ("Day 1, Hour 1", Some(7.0))]);
        let chart = predicted_chart(&predicted, &train);

        assert_eq!(chart.labels, vec!["Day 2, Hour 3"]);
        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Predicted Values", "Train Data (Occupancy)"]);
        assert_eq!(chart.series[0].color, PREDICTED_TEAL);
        assert_eq!(chart.series[1].color, TRAIN_BLUE);
        assert_eq!(chart.series[1].values, vec![Some(5.0), Some(7.0)]);
        assert_eq!(chart.y_title, "Values");
        assert_eq!(chart.point_count(), 1);
    }

    #[test]
    fn longer_train_history_stays_on_predicted_axis() {
        let predicted = series(&[("Day 9, Hour 0", Some(10.0)), ("Day 9, Hour 1", Some(11.0))]);
        let train = series(&[
            ("Day 1, Hour 0", Some(1.0)),
            ("Day 1, Hour 1", Some(2.0)),
            ("Day 1, Hour 2", Some(3.0)),
            ("Day 1, Hour 3", Some(400.0)),
            ("Day 1, Hour 4", Some(500.0)),
            ("Day 1, Hour 5", Some(600.0)),
        ]);
        let chart = predicted_chart(&predicted, &train);

        assert_eq!(chart.point_count(), chart.labels.len());
        assert_eq!(chart.point_count(), 2);
        assert_eq!(
            chart.series[1].segments(chart.point_count()),
            vec![vec![[0.0, 1.0], [1.0, 2.0]]]
        );
        // Values past the last label do not stretch the y range either.
        assert_eq!(chart.value_range(), Some((1.0, 11.0)));
    }

    #[test]
    fn future_chart_is_green() {
        let chart = future_chart(&series(&[("Day 8, Hour 0", Some(11.5))]));
        assert_eq!(chart.series[0].color, Rgb(0, 128, 0));
        assert_eq!(chart.series[0].name, "Future Predicted Occupancy");
        assert_eq!(chart.y_title, "Predicted Occupancy");
    }

    #[test]
    fn segments_break_at_missing_values() {
        let chart = train_chart(&series(&[
            ("a", Some(1.0)),
            ("b", Some(2.0)),
            ("c", None),
            ("d", Some(4.0)),
        ]));
        assert_eq!(
            chart.series[0].segments(chart.point_count()),
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0]]]
        );
    }

    #[test]
    fn label_lookup_rounds_and_bounds() {
        let chart = train_chart(&series(&[("Day 1, Hour 0", Some(1.0)), ("Day 1, Hour 1", None)]));
        assert_eq!(chart.label_at(0.2), Some("Day 1, Hour 0"));
        assert_eq!(chart.label_at(0.6), Some("Day 1, Hour 1"));
        assert_eq!(chart.label_at(2.0), None);
        assert_eq!(chart.label_at(-3.0), None);
        assert_eq!(chart.label_at(f64::NAN), None);
    }

    #[test]
    fn tooltip_lists_every_series_at_index() {
        let predicted = series(&[("Day 2, Hour 3", Some(42.0)), ("Day 2, Hour 4", Some(40.5))]);
        let train = series(&[("x", Some(5.0)), ("y", Some(7.0))]);
        let chart = predicted_chart(&predicted, &train);

        assert_eq!(
            chart.index_tooltip(1.1).unwrap(),
            "Day 2, Hour 4\nPredicted Values: 40.5\nTrain Data (Occupancy): 7"
        );
    }

    #[test]
    fn value_range_skips_missing() {
        let chart = train_chart(&series(&[("a", Some(3.0)), ("b", None), ("c", Some(-1.0))]));
        assert_eq!(chart.value_range(), Some((-1.0, 3.0)));
        assert_eq!(train_chart(&Series::default()).value_range(), None);
    }
}
