//! Data module - JSON loading and series shaping

mod loader;
mod processor;
mod records;

pub use loader::{DataLoader, DirSource, LoaderError, ResourceSource};
pub use processor::{DataProcessor, Series};
