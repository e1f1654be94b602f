use std::path::PathBuf;

use rigadvisor::schemas::computing::Category;
use structopt::StructOpt;

use crate::{common::read_build, run_impl_enum};

#[derive(StructOpt)]
pub struct Swap {
    /// Build JSON to start from; `-` reads stdin
    #[structopt(long, parse(from_os_str))]
    build: PathBuf,
    #[structopt(long)]
    category: Category,
    /// Id of the replacement part
    #[structopt(long)]
    id: String,
}

run_impl_enum!(Swap, self, advisor, ser, {
    let build = read_build(&self.build).await?;
    let swapped = advisor.swap_component(&build, self.category, &self.id);
    erased_serde::serialize(&swapped, ser)?;
});

#[derive(StructOpt)]
pub struct Alternatives {
    /// Build JSON to start from; `-` reads stdin
    #[structopt(long, parse(from_os_str))]
    build: PathBuf,
    #[structopt(long)]
    category: Category,
}

run_impl_enum!(Alternatives, self, advisor, ser, {
    let build = read_build(&self.build).await?;
    erased_serde::serialize(&advisor.alternatives(&build, self.category), ser)?;
});
