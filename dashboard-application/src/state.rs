use std::sync::Arc;

use dashboard_domain::{Dataset, RuntimeConfig};

use crate::Metrics;

/// Everything a render needs: the immutable dataset and the runtime
/// configuration. Cloning is cheap; the dataset itself is never copied.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub dataset: Arc<Dataset>,
    pub metrics: Arc<Metrics>,
}
