use std::collections::{BTreeMap, BTreeSet};

use crate::schemas::{
    build::Build,
    computing::{Category, UsageType},
};

/// How much a category counts towards the score for `usage`.
///
/// The weights are not normalized; per usage they add up to anywhere between 0.8 and 1.1.
pub fn category_weight(category: Category, usage: UsageType) -> f64 {
    match category {
        Category::Cpu => match usage {
            UsageType::ContentCreation | UsageType::Programming => 0.35,
            _ => 0.25,
        },
        Category::Gpu => match usage {
            UsageType::Gaming | UsageType::ContentCreation => 0.35,
            _ => 0.15,
        },
        Category::Ram => 0.15,
        Category::Storage => 0.10,
        Category::Motherboard => 0.05,
        Category::Psu => 0.05,
        Category::Case => 0.025,
        Category::Cooling => 0.025,
    }
}

/// Weighted sum of the chosen parts' ratings, per usage type.
///
/// Usage types outside `usage_types` score 0. Empty slots add nothing, so an
/// incomplete build always scores lower than a complete one.
pub fn score(build: &Build, usage_types: &BTreeSet<UsageType>) -> BTreeMap<UsageType, f64> {
    UsageType::ALL
        .iter()
        .map(|usage| {
            let value = if usage_types.contains(usage) {
                build
                    .filled()
                    .map(|(category, part)| part.rating(*usage) * category_weight(category, *usage))
                    .fold(0.0, |acc, contribution| acc + contribution)
            } else {
                0.0
            };
            (*usage, value)
        })
        .collect()
}
