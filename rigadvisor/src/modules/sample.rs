use anyhow::Context;
use async_trait::async_trait;

use crate::{catalog::Catalog, modules::CatalogProvider};

const SAMPLE_JSON: &str = include_str!("../../data/sample_catalog.json");

/// The parts list shipped with the crate.
pub fn sample_catalog() -> anyhow::Result<Catalog> {
    Catalog::from_json(SAMPLE_JSON).context("built-in sample catalog is invalid")
}

/// [`CatalogProvider`] for the built-in sample parts.
#[derive(Default)]
pub struct SampleCatalog;

#[async_trait]
impl CatalogProvider for SampleCatalog {
    async fn produce(&mut self) -> anyhow::Result<Catalog> {
        sample_catalog()
    }
}
