use rigadvisor::{common::Money, engine::dedup_usage, schemas::computing::UsageType};
use structopt::StructOpt;
use tracing::warn;

use crate::run_impl_enum;

#[derive(StructOpt)]
pub struct Recommend {
    /// Total budget in USD, e.g. 1500 or "$1,500"
    #[structopt(long, allow_hyphen_values = true)]
    budget: Money,
    /// Intended usage; repeat or comma-separate for several, most important first
    #[structopt(long = "usage", use_delimiter = true)]
    usage: Vec<UsageType>,
    /// Print only the build, ready to be fed back into `swap`
    #[structopt(long)]
    build_only: bool,
}

run_impl_enum!(Recommend, self, advisor, ser, {
    if self.budget.amount() <= 0.0 {
        warn!(budget = %self.budget, "budget is not positive, every category falls back to best value");
    }
    let recommendation = advisor.recommend(self.budget.amount(), &self.usage);
    if self.build_only {
        erased_serde::serialize(&recommendation.build, ser)?;
    } else {
        erased_serde::serialize(&recommendation, ser)?;
    }
});

#[derive(StructOpt)]
pub struct Allocate {
    /// Intended usage; repeat or comma-separate for several
    #[structopt(long = "usage", use_delimiter = true)]
    usage: Vec<UsageType>,
    /// Also turn fractions into amounts of this budget, in USD
    #[structopt(long, allow_hyphen_values = true)]
    budget: Option<Money>,
}

run_impl_enum!(Allocate, self, advisor, ser, {
    let allocation = advisor.allocate(&dedup_usage(&self.usage));
    match &self.budget {
        Some(budget) => {
            let amounts: std::collections::BTreeMap<_, _> = allocation
                .iter()
                .map(|(category, _)| (category, allocation.sub_budget(category, budget.amount())))
                .collect();
            erased_serde::serialize(&amounts, ser)?;
        }
        None => {
            erased_serde::serialize(&allocation, ser)?;
        }
    }
});
