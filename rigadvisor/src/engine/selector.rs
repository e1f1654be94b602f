use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    schemas::computing::{Category, Component, UsageType},
};

/// The usage type parts are ranked by: the first one picked, or general use when none was.
pub fn primary_usage(usage_types: &[UsageType]) -> UsageType {
    usage_types.first().copied().unwrap_or(UsageType::General)
}

/// Rating per unit of price. Free parts rank above everything else.
pub fn value_ratio(component: &Component, usage: UsageType) -> f64 {
    if component.price > 0.0 {
        component.rating(usage) / component.price
    } else {
        f64::INFINITY
    }
}

/// Pick the best-value part of `category` that fits `sub_budget`.
///
/// Candidates are ranked by [`value_ratio`] for `primary`, ties keeping catalog
/// order. When nothing fits, the best-value part is returned anyway, so a
/// category only stays empty when the catalog has nothing in it.
pub fn select_for_category<'c>(
    catalog: &'c Catalog,
    category: Category,
    sub_budget: f64,
    primary: UsageType,
) -> Option<&'c Component> {
    let mut ranked: Vec<(&Component, f64)> = catalog
        .by_category(category)
        .map(|c| (c, value_ratio(c, primary)))
        .collect();
    /* sort_by is stable, which is what keeps ties in catalog order */
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (candidate, ratio) in &ranked {
        trace!(%category, id = %candidate.id, price = candidate.price, ratio, "ranked candidate");
    }

    match ranked.iter().find(|(c, _)| c.price <= sub_budget) {
        Some((chosen, _)) => {
            debug!(%category, id = %chosen.id, sub_budget, "selected within budget");
            Some(*chosen)
        }
        None => {
            let fallback = ranked.first().map(|(c, _)| *c);
            match fallback {
                Some(chosen) => debug!(
                    %category,
                    id = %chosen.id,
                    price = chosen.price,
                    sub_budget,
                    "nothing fits the sub-budget, falling back to best value"
                ),
                None => debug!(%category, "catalog has no parts in this category"),
            }
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{primary_usage, select_for_category, value_ratio};
    use crate::catalog::Catalog;
    use crate::common::testing::{core_i5, part, ryzen_9};
    use crate::schemas::computing::{Category, UsageType};

    #[test]
    fn test_primary_usage() {
        assert_eq!(primary_usage(&[]), UsageType::General);
        assert_eq!(
            primary_usage(&[UsageType::Streaming, UsageType::Gaming]),
            UsageType::Streaming
        );
    }

    #[test]
    fn test_fallback_to_best_value() {
        let catalog = Catalog::new(vec![ryzen_9(), core_i5()]).unwrap();
        let chosen =
            select_for_category(&catalog, Category::Cpu, 120.0, UsageType::Programming).unwrap();
        assert_eq!(chosen.name, "Core i5-14600K");
    }

    #[test]
    fn test_best_value_within_budget() {
        let catalog = Catalog::new(vec![
            part("ram-1", Category::Ram, 69.0, 80.0),
            part("ram-2", Category::Ram, 159.0, 95.0),
            part("ram-3", Category::Ram, 40.0, 20.0),
        ])
        .unwrap();
        /* ram-1 has the best ratio and fits */
        let chosen = select_for_category(&catalog, Category::Ram, 100.0, UsageType::Office);
        assert_eq!(chosen.unwrap().id, "ram-1");
        /* ram-1 no longer fits; ram-3 is the only one that does */
        let chosen = select_for_category(&catalog, Category::Ram, 50.0, UsageType::Office);
        assert_eq!(chosen.unwrap().id, "ram-3");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            part("case-b", Category::Case, 100.0, 50.0),
            part("case-a", Category::Case, 100.0, 50.0),
            part("case-c", Category::Case, 200.0, 100.0),
        ])
        .unwrap();
        let chosen = select_for_category(&catalog, Category::Case, 500.0, UsageType::General);
        assert_eq!(chosen.unwrap().id, "case-b");
    }

    #[test]
    fn test_free_part_ranks_first() {
        let free = part("cooling-0", Category::Cooling, 0.0, 10.0);
        assert_eq!(value_ratio(&free, UsageType::Gaming), f64::INFINITY);

        let catalog = Catalog::new(vec![
            part("cooling-1", Category::Cooling, 1.0, 100.0),
            free,
        ])
        .unwrap();
        let chosen = select_for_category(&catalog, Category::Cooling, 0.0, UsageType::Gaming);
        assert_eq!(chosen.unwrap().id, "cooling-0");
    }

    #[test]
    fn test_empty_category() {
        let catalog = Catalog::new(vec![core_i5()]).unwrap();
        assert!(select_for_category(&catalog, Category::Psu, 1000.0, UsageType::General).is_none());
    }
}
