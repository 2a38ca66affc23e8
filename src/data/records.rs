//! Record Types Module
//! Flat per-hour entries read from the three JSON resources.

use serde::Deserialize;

/// The three data sources, each served as one JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Predicted,
    Train,
    FuturePrediction,
}

impl Dataset {
    /// Fixed resource name relative to the data root.
    pub fn resource_name(self) -> &'static str {
        match self {
            Dataset::Predicted => "predicted_data.json",
            Dataset::Train => "train_data.json",
            Dataset::FuturePrediction => "future_predictions.json",
        }
    }
}

/// Common accessors over every record variant.
pub trait Record {
    fn sequential_day(&self) -> i64;
    fn hour(&self) -> i64;
    /// The variant's designated measurement, `None` when the field was absent.
    fn value(&self) -> Option<f64>;
}

/// One model output point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictedRecord {
    pub sequential_day: i64,
    pub hour: i64,
    #[serde(rename = "Predicted Values", default)]
    pub predicted_values: Option<f64>,
}

/// One historical observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainRecord {
    pub sequential_day: i64,
    pub hour: i64,
    #[serde(default)]
    pub occupancy: Option<f64>,
}

/// One forward-looking forecast point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuturePredictionRecord {
    pub sequential_day: i64,
    pub hour: i64,
    #[serde(default)]
    pub predicted_occupancy: Option<f64>,
}

impl Record for PredictedRecord {
    fn sequential_day(&self) -> i64 {
        self.sequential_day
    }

    fn hour(&self) -> i64 {
        self.hour
    }

    fn value(&self) -> Option<f64> {
        self.predicted_values
    }
}

impl Record for TrainRecord {
    fn sequential_day(&self) -> i64 {
        self.sequential_day
    }

    fn hour(&self) -> i64 {
        self.hour
    }

    fn value(&self) -> Option<f64> {
        self.occupancy
    }
}

impl Record for FuturePredictionRecord {
    fn sequential_day(&self) -> i64 {
        self.sequential_day
    }

    fn hour(&self) -> i64 {
        self.hour
    }

    fn value(&self) -> Option<f64> {
        self.predicted_occupancy
    }
}
