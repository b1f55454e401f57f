use std::path::Path;

use async_trait::async_trait;

use crate::entities::Dataset;

/// Where the dataset comes from. Loading happens exactly once, at startup;
/// a failure here is fatal by design.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self, path: &Path) -> anyhow::Result<Dataset>;
}
