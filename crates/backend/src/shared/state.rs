use std::sync::Arc;

use super::data::DatasetProvider;

/// Shared state of the HTTP server
pub struct AppState {
    pub provider: Arc<dyn DatasetProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DatasetProvider>) -> Self {
        Self { provider }
    }
}
