use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use crate::{catalog::Catalog, modules::CatalogProvider};

/// A catalog stored as JSON on disk.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn produce(&mut self) -> anyhow::Result<Catalog> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("could not read catalog {}", self.path.display()))?;
        let catalog = Catalog::from_json(&text)
            .with_context(|| format!("invalid catalog {}", self.path.display()))?;
        info!(path = %self.path.display(), parts = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
