use serde::Serialize;

use crate::{
    catalog::Catalog,
    schemas::{
        build::Build,
        computing::{Category, Component, UsageType},
    },
};

/// Usages scoring above this are called out as what the build is good at.
pub const STANDOUT_THRESHOLD: f64 = 80.0;

/// How far a build's price is from the budget, in whole percent of the budget.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BudgetStatus {
    Under { percent: u32 },
    Over { percent: u32 },
}

impl BudgetStatus {
    pub fn of(total_price: f64, budget: f64) -> Self {
        if budget <= 0.0 {
            return if total_price > 0.0 {
                Self::Over { percent: 100 }
            } else {
                Self::Under { percent: 0 }
            };
        }

        let percent = ((budget - total_price).abs() / budget * 100.0).round() as u32;
        if total_price <= budget {
            Self::Under { percent }
        } else {
            Self::Over { percent }
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

/// A usage the build does particularly well at.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Standout {
    pub usage: UsageType,
    pub score: f64,
}

/// Usages scoring above [`STANDOUT_THRESHOLD`], best first.
pub fn standout_usages(build: &Build) -> Vec<Standout> {
    let mut standouts: Vec<Standout> = UsageType::ALL
        .iter()
        .map(|usage| Standout {
            usage: *usage,
            score: build.score(*usage),
        })
        .filter(|s| s.score > STANDOUT_THRESHOLD)
        .collect();
    standouts.sort_by(|a, b| b.score.total_cmp(&a.score));
    standouts
}

/// Other parts that could go into `category`, in catalog order.
pub fn alternatives<'c>(
    catalog: &'c Catalog,
    build: &Build,
    category: Category,
) -> Vec<&'c Component> {
    let current = build.get(category).map(|c| c.id.as_str());
    catalog
        .by_category(category)
        .filter(|c| Some(c.id.as_str()) != current)
        .collect()
}

/// Drop repeated usage types, keeping the first occurrence of each.
pub fn dedup_usage(usage_types: &[UsageType]) -> Vec<UsageType> {
    let mut unique = Vec::with_capacity(usage_types.len());
    for usage in usage_types {
        if !unique.contains(usage) {
            unique.push(*usage);
        }
    }
    unique
}

/// A generated build together with what a caller needs to present it.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub budget: f64,
    pub usage_types: Vec<UsageType>,
    pub build: Build,
    pub budget_status: BudgetStatus,
    pub standouts: Vec<Standout>,
}

impl Recommendation {
    pub fn new(budget: f64, usage_types: Vec<UsageType>, build: Build) -> Self {
        Self {
            budget_status: BudgetStatus::of(build.total_price, budget),
            standouts: standout_usages(&build),
            budget,
            usage_types,
            build,
        }
    }
}
