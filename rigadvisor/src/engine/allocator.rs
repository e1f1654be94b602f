use std::collections::BTreeMap;

use lazy_static::lazy_static;
use maplit::btreemap;
use serde::Serialize;
use tracing::debug;

use crate::schemas::computing::{Category, UsageType};

lazy_static! {
    /// Share of the budget each category gets before any usage-specific override. Sums to 1.
    static ref BASE_FRACTIONS: BTreeMap<Category, f64> = btreemap! {
        Category::Cpu => 0.25,
        Category::Gpu => 0.30,
        Category::Motherboard => 0.12,
        Category::Ram => 0.10,
        Category::Storage => 0.12,
        Category::Psu => 0.06,
        Category::Case => 0.03,
        Category::Cooling => 0.02,
    };
}

/// Fraction of the total budget per [`Category`].
///
/// Overrides replace single entries and nothing is renormalized afterwards,
/// so the fractions may add up to more (or less) than 1.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Allocation(BTreeMap<Category, f64>);

impl Allocation {
    pub fn fraction(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// The amount of `budget` set aside for `category`.
    pub fn sub_budget(&self, category: Category, budget: f64) -> f64 {
        budget * self.fraction(category)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, f)| (*c, *f))
    }
}

/// Split a budget across categories for the given usage selection.
///
/// At most one override applies, checked in priority order: gaming, then
/// content creation, then programming.
pub fn allocate(usage_types: &[UsageType]) -> Allocation {
    let mut fractions = BASE_FRACTIONS.clone();

    let overrides: &[(Category, f64)] = if usage_types.contains(&UsageType::Gaming) {
        &[(Category::Gpu, 0.35), (Category::Cpu, 0.22)]
    } else if usage_types.contains(&UsageType::ContentCreation) {
        &[
            (Category::Cpu, 0.30),
            (Category::Ram, 0.15),
            (Category::Storage, 0.15),
        ]
    } else if usage_types.contains(&UsageType::Programming) {
        &[
            (Category::Cpu, 0.30),
            (Category::Ram, 0.15),
            (Category::Gpu, 0.20),
        ]
    } else {
        &[]
    };

    fractions.extend(overrides.iter().copied());

    let allocation = Allocation(fractions);
    debug!(
        usage = ?usage_types,
        total = allocation.total(),
        "allocated budget fractions"
    );
    allocation
}
