use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::csv_loader::load_dataset;
use super::dataset::Dataset;
use super::error::LoadError;

/// Source of the dashboard dataset.
///
/// Handlers and the dashboard service only see this trait, so tests can
/// inject an in-memory dataset instead of a file.
pub trait DatasetProvider: Send + Sync {
    fn dataset(&self) -> Result<Arc<Dataset>, LoadError>;
}

/// Reads the CSV on first use and returns the same `Arc` afterwards.
///
/// A failed load is not cached; the next call reads the file again.
pub struct CsvDatasetProvider {
    path: PathBuf,
    cached: OnceCell<Arc<Dataset>>,
}

impl CsvDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cached
            .get_or_try_init(|| {
                let start = Instant::now();
                let dataset = load_dataset(&self.path)?;
                tracing::info!(
                    "Dataset loaded from {}: {} rows in {}ms",
                    self.path.display(),
                    dataset.len(),
                    start.elapsed().as_millis()
                );
                Ok::<_, LoadError>(Arc::new(dataset))
            })
            .map(Arc::clone)
    }
}

/// Provider over a dataset that is already in memory
pub struct StaticDatasetProvider {
    dataset: Arc<Dataset>,
}

impl StaticDatasetProvider {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

impl DatasetProvider for StaticDatasetProvider {
    fn dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        Ok(Arc::clone(&self.dataset))
    }
}
