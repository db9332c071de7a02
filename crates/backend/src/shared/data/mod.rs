pub mod csv_loader;
pub mod dataset;
pub mod error;
pub mod provider;

pub use dataset::Dataset;
pub use error::LoadError;
pub use provider::{CsvDatasetProvider, DatasetProvider, StaticDatasetProvider};

#[cfg(test)]
pub mod fixtures;
