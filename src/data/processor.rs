//! Data Processor Module
//! Shapes records into parallel label/value sequences for line charts.

use crate::data::records::{FuturePredictionRecord, PredictedRecord, Record, TrainRecord};

/// Parallel label/value sequences, one entry per source record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// Pure record transformations.
pub struct DataProcessor;

impl DataProcessor {
    /// Axis label for one time point.
    pub fn time_label(sequential_day: i64, hour: i64) -> String {
        format!("Day {}, Hour {}", sequential_day, hour)
    }

    /// Map records to a Series, keeping input order.
    pub fn to_series<R: Record>(records: &[R]) -> Series {
        let mut labels = Vec::with_capacity(records.len());
        let mut values = Vec::with_capacity(records.len());

        for record in records {
            labels.push(Self::time_label(record.sequential_day(), record.hour()));
            values.push(record.value());
        }

        Series { labels, values }
    }

    pub fn process_predicted(records: &[PredictedRecord]) -> Series {
        Self::to_series(records)
    }

    pub fn process_train(records: &[TrainRecord]) -> Series {
        Self::to_series(records)
    }

    pub fn process_future_prediction(records: &[FuturePredictionRecord]) -> Series {
        Self::to_series(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(day: i64, hour: i64, occupancy: f64) -> TrainRecord {
        TrainRecord {
            sequential_day: day,
            hour,
            occupancy: Some(occupancy),
        }
    }

    #[test]
    fn train_records_become_labels_and_values() {
        let series = DataProcessor::process_train(&[train(1, 0, 5.0), train(1, 1, 7.0)]);
        assert_eq!(series.labels, vec!["Day 1, Hour 0", "Day 1, Hour 1"]);
        assert_eq!(series.values, vec![Some(5.0), Some(7.0)]);
    }

    #[test]
    fn predicted_records_use_predicted_values() {
        let records: Vec<PredictedRecord> =
            serde_json::from_str(r#"[{"sequential_day":2,"hour":3,"Predicted Values":42}]"#)
                .unwrap();
        let series = DataProcessor::process_predicted(&records);
        assert_eq!(series.labels, vec!["Day 2, Hour 3"]);
        assert_eq!(series.values, vec![Some(42.0)]);
    }

    #[test]
    fn future_records_use_predicted_occupancy() {
        let records = vec![FuturePredictionRecord {
            sequential_day: 30,
            hour: 23,
            predicted_occupancy: Some(12.25),
        }];
        let series = DataProcessor::process_future_prediction(&records);
        assert_eq!(series.labels, vec!["Day 30, Hour 23"]);
        assert_eq!(series.values, vec![Some(12.25)]);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(DataProcessor::process_train(&[]).labels.is_empty());
        assert_eq!(DataProcessor::process_predicted(&[]), Series::default());
        assert_eq!(DataProcessor::process_future_prediction(&[]).values.len(), 0);
    }

    #[test]
    fn order_and_length_follow_input_without_sorting() {
        // Out of order, duplicated and with a gap in hours.
        let records = vec![
            train(3, 5, 1.0),
            train(1, 0, 2.0),
            train(1, 0, 3.0),
            train(1, 7, 4.0),
        ];
        let series = DataProcessor::process_train(&records);

        assert_eq!(series.labels.len(), records.len());
        assert_eq!(series.values.len(), records.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(
                series.labels[i],
                format!("Day {}, Hour {}", record.sequential_day, record.hour)
            );
            assert_eq!(series.values[i], record.occupancy);
        }
    }

    #[test]
    fn labels_are_not_padded() {
        assert_eq!(DataProcessor::time_label(7, 9), "Day 7, Hour 9");
        assert_eq!(DataProcessor::time_label(-1, 0), "Day -1, Hour 0");
    }

    #[test]
    fn missing_values_pass_through() {
        let records = vec![
            TrainRecord {
                sequential_day: 1,
                hour: 0,
                occupancy: None,
            },
            train(1, 1, 2.0),
        ];
        let series = DataProcessor::process_train(&records);
        assert_eq!(series.values, vec![None, Some(2.0)]);
        assert_eq!(series.labels.len(), 2);
    }

    #[test]
    fn transforming_twice_is_idempotent() {
        let records = vec![train(1, 0, 5.0), train(1, 1, 7.0)];
        assert_eq!(
            DataProcessor::process_train(&records),
            DataProcessor::process_train(&records)
        );
    }
}
