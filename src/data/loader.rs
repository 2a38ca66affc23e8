//! JSON Data Loader Module
//! Fetches the three JSON resources concurrently and decodes them into records.

use crate::data::records::{Dataset, FuturePredictionRecord, PredictedRecord, TrainRecord};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch {resource}: {source}")]
    Fetch {
        resource: String,
        source: std::io::Error,
    },
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: String,
        source: serde_json::Error,
    },
}

/// Somewhere named resources can be fetched from.
pub trait ResourceSource {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, LoaderError>>;
}

/// Resources stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoaderError> {
        let path = self.root.join(name);
        tokio::fs::read(&path)
            .await
            .map_err(|err| LoaderError::Fetch {
                resource: name.to_string(),
                source: std::io::Error::new(err.kind(), format!("{}: {}", path.display(), err)),
            })
    }
}

/// Records from all three resources of one load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    pub predicted: Vec<PredictedRecord>,
    pub train: Vec<TrainRecord>,
    pub future: Vec<FuturePredictionRecord>,
}

/// Loads the occupancy datasets from a resource source.
pub struct DataLoader<S> {
    source: S,
}

impl<S: ResourceSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and decode all three datasets. Any single failure aborts the load.
    pub async fn load_all(&self) -> Result<LoadedData, LoaderError> {
        let (predicted, train, future) = tokio::try_join!(
            self.load::<PredictedRecord>(Dataset::Predicted),
            self.load::<TrainRecord>(Dataset::Train),
            self.load::<FuturePredictionRecord>(Dataset::FuturePrediction),
        )?;

        info!(
            predicted = predicted.len(),
            train = train.len(),
            future = future.len(),
            "Loaded occupancy data"
        );

        Ok(LoadedData {
            predicted,
            train,
            future,
        })
    }

    async fn load<R: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<R>, LoaderError> {
        let name = dataset.resource_name();
        let body = self.source.fetch(name).await?;
        debug!(resource = name, bytes = body.len(), "Fetched resource");

        serde_json::from_slice(&body).map_err(|source| LoaderError::Decode {
            resource: name.to_string(),
            source,
        })
    }
}
