use async_trait::async_trait;

use crate::catalog::Catalog;

pub mod file;
pub mod http;
pub mod sample;

/// Something that can hand the engine a [`Catalog`].
///
/// The engine reads a catalog once per call; providers are where the data
/// actually comes from (built in, on disk, over HTTP).
#[async_trait]
pub trait CatalogProvider {
    async fn produce(&mut self) -> anyhow::Result<Catalog>;
}
