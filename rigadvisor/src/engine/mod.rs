//! The recommendation engine.
//!
//! Everything here is a pure function of its inputs: the [`Catalog`] is only
//! read, and every [`Build`] handed back is a fresh value. [`Advisor`] bundles
//! the functions with a shared catalog snapshot for callers that make several
//! calls against the same catalog, possibly from several threads.

pub mod allocator;
pub mod report;
pub mod scorer;
pub mod selector;
pub mod swapper;

use std::{collections::BTreeSet, sync::Arc};

use tracing::{debug, info_span};

use crate::{
    catalog::Catalog,
    schemas::{
        build::Build,
        computing::{Category, Component, UsageType},
    },
};

pub use allocator::{allocate, Allocation};
pub use report::{
    alternatives, dedup_usage, standout_usages, BudgetStatus, Recommendation, Standout,
};
pub use scorer::{category_weight, score};
pub use selector::{primary_usage, select_for_category, value_ratio};
pub use swapper::swap;

/// Allocate `budget`, pick one part per category and score the result.
///
/// `usage_types` is expected to be free of duplicates; its first entry decides
/// how parts are ranked.
pub fn generate_build(catalog: &Catalog, budget: f64, usage_types: &[UsageType]) -> Build {
    let _span = info_span!("generate_build", budget, usage = ?usage_types).entered();

    let allocation = allocate(usage_types);
    let primary = primary_usage(usage_types);

    let mut build = Build::default();
    for category in Category::ALL.iter() {
        let sub_budget = allocation.sub_budget(*category, budget);
        let chosen = select_for_category(catalog, *category, sub_budget, primary);
        build.selection.insert(*category, chosen.cloned());
    }
    build.total_price = build.price_sum();

    let usages: BTreeSet<_> = usage_types.iter().copied().collect();
    build.performance_scores = score(&build, &usages);

    debug!(
        total_price = build.total_price,
        unfilled = build.unfilled().count(),
        "generated build"
    );
    build
}

/// The engine's entry points, bound to one catalog snapshot.
#[derive(Clone, Debug)]
pub struct Advisor {
    catalog: Arc<Catalog>,
}

impl Advisor {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn allocate(&self, usage_types: &[UsageType]) -> Allocation {
        allocate(usage_types)
    }

    pub fn generate_build(&self, budget: f64, usage_types: &[UsageType]) -> Build {
        generate_build(&self.catalog, budget, usage_types)
    }

    /// Generate a build and wrap it with its budget status and standout usages.
    /// Repeated usage types are dropped first.
    pub fn recommend(&self, budget: f64, usage_types: &[UsageType]) -> Recommendation {
        let usage_types = dedup_usage(usage_types);
        let build = self.generate_build(budget, &usage_types);
        Recommendation::new(budget, usage_types, build)
    }

    pub fn swap_component(&self, build: &Build, category: Category, component_id: &str) -> Build {
        swap(&self.catalog, build, category, component_id)
    }

    pub fn alternatives(&self, build: &Build, category: Category) -> Vec<&Component> {
        alternatives(&self.catalog, build, category)
    }
}

impl From<Arc<Catalog>> for Advisor {
    fn from(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::{generate_build, Advisor};
    use crate::catalog::Catalog;
    use crate::common::testing::{core_i5, part, roughly_equal, ryzen_9};
    use crate::schemas::computing::{Category, UsageType};

    fn full_catalog() -> Catalog {
        let mut parts = vec![core_i5(), ryzen_9()];
        for category in Category::ALL.iter().skip(1) {
            parts.push(part(&format!("{}-cheap", category), *category, 50.0, 60.0));
            parts.push(part(&format!("{}-pricey", category), *category, 400.0, 95.0));
        }
        Catalog::new(parts).unwrap()
    }

    #[test]
    fn test_two_cpu_example() {
        let catalog = Catalog::new(vec![core_i5(), ryzen_9()]).unwrap();
        let build = generate_build(&catalog, 400.0, &[UsageType::Programming]);

        assert_eq!(build.get(Category::Cpu).unwrap().name, "Core i5-14600K");
        assert_eq!(build.filled().count(), 1);
        assert_eq!(build.total_price, 319.0);
        assert_eq!(build.score(UsageType::Programming), 85.0 * 0.35);
        assert_eq!(build.score(UsageType::Gaming), 0.0);
    }

    #[test]
    fn test_fills_every_stocked_category() {
        let catalog = full_catalog();
        for budget in [1.0, 800.0, 5000.0].iter() {
            for usage in [
                vec![],
                vec![UsageType::Gaming],
                vec![UsageType::ContentCreation, UsageType::Streaming],
                vec![UsageType::Office],
            ]
            .iter()
            {
                let build = generate_build(&catalog, *budget, usage);
                assert_eq!(build.unfilled().count(), 0);
                assert_eq!(build.total_price, build.price_sum());
            }
        }
    }

    #[test]
    fn test_non_positive_budget_still_builds() {
        let build = generate_build(&full_catalog(), 0.0, &[]);
        assert_eq!(build.unfilled().count(), 0);
        assert!(build.performance_scores.values().all(|s| *s == 0.0));

        let build = generate_build(&full_catalog(), -100.0, &[UsageType::Office]);
        assert_eq!(build.unfilled().count(), 0);
        assert!(build.score(UsageType::Office) > 0.0);
    }

    #[test]
    fn test_empty_catalog() {
        let build = generate_build(&Catalog::default(), 1500.0, &[UsageType::Gaming]);
        assert_eq!(build.unfilled().count(), Category::ALL.len());
        assert_eq!(build.total_price, 0.0);
        assert_eq!(build.score(UsageType::Gaming), 0.0);
    }

    #[test]
    fn test_generate_then_swap_keeps_totals() {
        let advisor = Advisor::new(full_catalog());
        let build = advisor.generate_build(2000.0, &[UsageType::Gaming, UsageType::Streaming]);
        let old_gpu_price = build.get(Category::Gpu).unwrap().price;

        let replacement = advisor
            .alternatives(&build, Category::Gpu)
            .first()
            .map(|c| (c.id.clone(), c.price))
            .unwrap();
        let swapped = advisor.swap_component(&build, Category::Gpu, &replacement.0);

        assert!(roughly_equal(
            swapped.total_price,
            build.total_price - old_gpu_price + replacement.1
        ));
        assert_eq!(swapped.total_price, swapped.price_sum());
        assert_eq!(
            swapped.scored_usages(),
            vec![UsageType::Gaming, UsageType::Streaming]
        );
    }

    #[test]
    fn test_recommend_dedups() {
        let advisor = Advisor::new(full_catalog());
        let recommendation = advisor.recommend(
            1500.0,
            &[UsageType::Office, UsageType::Office, UsageType::Gaming],
        );
        assert_eq!(
            recommendation.usage_types,
            vec![UsageType::Office, UsageType::Gaming]
        );
        assert_eq!(
            recommendation.build,
            advisor.generate_build(1500.0, &[UsageType::Office, UsageType::Gaming])
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let advisor = Advisor::new(full_catalog());
        let expected = advisor.generate_build(1200.0, &[UsageType::Programming]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let advisor = advisor.clone();
                thread::spawn(move || advisor.generate_build(1200.0, &[UsageType::Programming]))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
