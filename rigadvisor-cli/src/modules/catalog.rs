use structopt::StructOpt;

use crate::{common::Run, run_impl_enum, run_impl_struct};

#[derive(StructOpt)]
pub struct Catalog {
    #[structopt(subcommand)]
    query: Query,
}

run_impl_struct!(Catalog, query);

#[derive(StructOpt)]
enum Query {
    /// List parts, optionally only one category
    List {
        #[structopt(long)]
        category: Option<rigadvisor::schemas::computing::Category>,
    },
    /// Show one part by id
    Show { id: String },
}

run_impl_enum!(Query, self, advisor, ser, {
    match self {
        Self::List { category } => {
            let parts: Vec<_> = match category {
                Some(category) => advisor.catalog().by_category(*category).collect(),
                None => advisor.catalog().iter().collect(),
            };
            erased_serde::serialize(&parts, ser)?;
        }
        Self::Show { id } => {
            let part = advisor
                .catalog()
                .find(id)
                .ok_or_else(|| anyhow::anyhow!("no component with id {:?}", id))?;
            erased_serde::serialize(part, ser)?;
        }
    }
});
