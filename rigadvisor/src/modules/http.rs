use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::{catalog::Catalog, modules::CatalogProvider};

/// A JSON catalog served over HTTP.
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new<S: Into<String>>(url: S) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
        })
    }

    /// Use an already configured client, e.g. one with custom proxy or TLS settings.
    pub fn with_client<S: Into<String>>(client: Client, url: S) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn produce(&mut self) -> anyhow::Result<Catalog> {
        let text = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .with_context(|| format!("could not fetch catalog from {}", self.url))?
            .text()
            .await?;
        let catalog =
            Catalog::from_json(&text).with_context(|| format!("invalid catalog at {}", self.url))?;
        info!(url = %self.url, parts = catalog.len(), "fetched catalog");
        Ok(catalog)
    }
}
