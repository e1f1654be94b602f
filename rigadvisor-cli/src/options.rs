use std::path::PathBuf;

use rigadvisor::{
    modules::{
        file::JsonFileCatalog, http::HttpCatalog, sample::SampleCatalog, CatalogProvider,
    },
    Catalog,
};
use structopt::StructOpt;

use crate::{
    common::Run,
    modules::{
        catalog,
        recommend::{Allocate, Recommend},
        swap::{Alternatives, Swap},
    },
    run_impl_enum,
};

#[derive(StructOpt)]
#[structopt(name = "rigadvisor-cli")]
pub struct Options {
    /// Read the parts catalog from a JSON file instead of the built-in sample
    #[structopt(long, parse(from_os_str))]
    pub catalog: Option<PathBuf>,
    /// Fetch the parts catalog from a URL instead of the built-in sample
    #[structopt(long, conflicts_with = "catalog")]
    pub catalog_url: Option<String>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
    #[structopt(subcommand)]
    pub command: Command,
}

impl Options {
    pub async fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let mut provider: Box<dyn CatalogProvider + Send> = match (&self.catalog, &self.catalog_url)
        {
            (Some(path), _) => Box::new(JsonFileCatalog::new(path)),
            (None, Some(url)) => Box::new(HttpCatalog::new(url.as_str())?),
            (None, None) => Box::new(SampleCatalog),
        };
        provider.produce().await
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(StructOpt)]
pub enum Command {
    /// Browse the parts catalog
    Catalog(catalog::Catalog),
    /// Show how a budget is split across categories
    Allocate(Allocate),
    /// Recommend a complete build for a budget
    Recommend(Recommend),
    /// Replace one part of a build
    Swap(Swap),
    /// List the other parts that fit a category of a build
    Alternatives(Alternatives),
}

run_impl_enum!(Command, self, advisor, ser, {
    match self {
        Self::Catalog(c) => c.run(advisor, ser).await?,
        Self::Allocate(a) => a.run(advisor, ser).await?,
        Self::Recommend(r) => r.run(advisor, ser).await?,
        Self::Swap(s) => s.run(advisor, ser).await?,
        Self::Alternatives(a) => a.run(advisor, ser).await?,
    }
});
