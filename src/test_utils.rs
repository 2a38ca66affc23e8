//! Shared fixtures for unit tests.

use crate::data::{LoaderError, ResourceSource};
use std::collections::HashMap;
use tempfile::TempDir;

pub const PREDICTED_JSON: &str = r#"[
    {"sequential_day": 2, "hour": 3, "Predicted Values": 42},
    {"sequential_day": 2, "hour": 4, "Predicted Values": 40.5}
]"#;

pub const TRAIN_JSON: &str = r#"[
    {"sequential_day": 1, "hour": 0, "occupancy": 5},
    {"sequential_day": 1, "hour": 1, "occupancy": 7},
    {"sequential_day": 1, "hour": 2}
]"#;

pub const FUTURE_JSON: &str = r#"[
    {"sequential_day": 8, "hour": 0, "predicted_occupancy": 11.5}
]"#;

/// In-memory resources keyed by name. Unknown names behave like a 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn sample() -> Self {
        Self::default()
            .with("predicted_data.json", PREDICTED_JSON)
            .with("train_data.json", TRAIN_JSON)
            .with("future_predictions.json", FUTURE_JSON)
    }

    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.resources.insert(name.to_string(), body.to_string());
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.resources.remove(name);
        self
    }
}

impl ResourceSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoaderError> {
        self.resources
            .get(name)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| LoaderError::Fetch {
                resource: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "404 Not Found"),
            })
    }
}

/// Temporary directory holding the sample resources as files.
pub fn sample_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, body) in [
        ("predicted_data.json", PREDICTED_JSON),
        ("train_data.json", TRAIN_JSON),
        ("future_predictions.json", FUTURE_JSON),
    ] {
        std::fs::write(dir.path().join(name), body).expect("Failed to write fixture");
    }
    dir
}
