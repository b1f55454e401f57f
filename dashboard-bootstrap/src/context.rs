use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use dashboard_application::{AppState, Metrics};
use dashboard_domain::DatasetSource;
use dashboard_infrastructure::{AppConfig, CsvDatasetSource};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    /// Loads configuration, then the dataset. Any failure here aborts
    /// startup; the dashboard never serves without its data.
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let source = CsvDatasetSource::new();
        let dataset = source
            .load(Path::new(&runtime_config.dataset_path))
            .await?;
        info!(rows = dataset.len(), path = %runtime_config.dataset_path, "dataset ready");

        let state = AppState {
            config: runtime_config,
            dataset: Arc::new(dataset),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
