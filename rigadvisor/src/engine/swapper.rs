use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    engine::scorer::score,
    schemas::{build::Build, computing::Category},
};

/// Put the part with id `component_id` into `category`, returning a new build.
///
/// The id is looked up across the whole catalog, so a part from another
/// category is accepted too. An unknown id leaves the build as it was.
/// Scores are recomputed for the usages `build` had nonzero scores for.
pub fn swap(catalog: &Catalog, build: &Build, category: Category, component_id: &str) -> Build {
    let replacement = match catalog.find(component_id) {
        Some(component) => component,
        None => {
            debug!(%category, id = component_id, "no such component, keeping build");
            return build.clone();
        }
    };

    if replacement.category != category {
        warn!(
            %category,
            id = %replacement.id,
            actual = %replacement.category,
            "swapping in a part from another category"
        );
    }

    let usages: BTreeSet<_> = build.scored_usages().into_iter().collect();

    let mut swapped = build.clone();
    let previous = swapped
        .selection
        .insert(category, Some(replacement.clone()))
        .flatten();
    swapped.total_price = swapped.price_sum();
    swapped.performance_scores = score(&swapped, &usages);

    debug!(
        %category,
        from = previous.as_ref().map(|p| p.id.as_str()).unwrap_or("<none>"),
        to = %replacement.id,
        total_price = swapped.total_price,
        "swapped component"
    );
    swapped
}
