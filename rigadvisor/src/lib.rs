//! Recommend a complete set of PC parts for a budget and a set of usage types,
//! and keep price and scores consistent as parts are swapped by hand.
//!
//! ```no_run
//! use rigadvisor::{engine::Advisor, modules::sample::sample_catalog, schemas::computing::*};
//!
//! let advisor = Advisor::new(sample_catalog()?);
//! let build = advisor.generate_build(1500.0, &[UsageType::Gaming]);
//! let faster = advisor.swap_component(&build, Category::Gpu, "gpu-3");
//! assert!(faster.total_price > build.total_price);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod common;
pub mod engine;
pub mod modules;
pub mod schemas;

pub use catalog::Catalog;
pub use engine::{generate_build, swap, Advisor};
