use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schemas::computing::{Category, Component, UsageType};

/// One assembled configuration: at most one part per [`Category`], its price and its scores.
///
/// A `Build` is a value. Operations that change it (see [`crate::engine::swap`])
/// hand back a new `Build` and leave the old one untouched, so callers can keep
/// earlier versions around for undo.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub selection: BTreeMap<Category, Option<Component>>,
    pub total_price: f64,
    pub performance_scores: BTreeMap<UsageType, f64>,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            selection: Category::ALL.iter().map(|c| (*c, None)).collect(),
            total_price: 0.0,
            performance_scores: UsageType::ALL.iter().map(|u| (*u, 0.0)).collect(),
        }
    }
}

impl Build {
    /// The part chosen for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&Component> {
        self.selection.get(&category).and_then(Option::as_ref)
    }

    /// Every filled slot, in canonical category order.
    pub fn filled(&self) -> impl Iterator<Item = (Category, &Component)> + '_ {
        self.selection
            .iter()
            .filter_map(|(category, part)| part.as_ref().map(|p| (*category, p)))
    }

    /// Categories with nothing chosen.
    pub fn unfilled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .iter()
            .copied()
            .filter(move |c| self.get(*c).is_none())
    }

    /// Sum of the prices of every chosen part.
    pub fn price_sum(&self) -> f64 {
        self.filled().fold(0.0, |acc, (_, part)| acc + part.price)
    }

    pub fn score(&self, usage: UsageType) -> f64 {
        self.performance_scores.get(&usage).copied().unwrap_or(0.0)
    }

    /// Usage types with a nonzero score; this is how a build remembers which
    /// usages it was scored for.
    pub fn scored_usages(&self) -> Vec<UsageType> {
        UsageType::ALL
            .iter()
            .copied()
            .filter(|u| self.score(*u) > 0.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Build;
    use crate::common::testing::{core_i5, part};
    use crate::schemas::computing::{Category, UsageType};

    #[test]
    fn test_default_is_total_and_empty() {
        let build = Build::default();
        assert_eq!(build.selection.len(), Category::ALL.len());
        assert_eq!(build.performance_scores.len(), UsageType::ALL.len());
        assert_eq!(build.filled().count(), 0);
        assert_eq!(build.unfilled().count(), 8);
        assert_eq!(build.price_sum(), 0.0);
    }

    #[test]
    fn test_filled_and_scored() {
        let mut build = Build::default();
        build.selection.insert(Category::Cpu, Some(core_i5()));
        build
            .selection
            .insert(Category::Case, Some(part("case-1", Category::Case, 80.0, 70.0)));
        build.performance_scores.insert(UsageType::Office, 22.5);

        assert_eq!(build.get(Category::Cpu).unwrap().name, "Core i5-14600K");
        assert!(build.get(Category::Gpu).is_none());
        assert_eq!(build.price_sum(), 399.0);
        assert_eq!(build.scored_usages(), vec![UsageType::Office]);
        assert!(!build.unfilled().any(|c| c == Category::Case));
    }

    #[test]
    fn test_json_shape() {
        let mut build = Build::default();
        build.selection.insert(Category::Cpu, Some(core_i5()));
        build.total_price = 319.0;

        let json = serde_json::to_value(&build).unwrap();
        assert_eq!(json["totalPrice"], 319.0);
        assert_eq!(json["selection"]["cpu"]["id"], "cpu-1");
        assert!(json["selection"]["gpu"].is_null());
        assert_eq!(json["performanceScores"]["content-creation"], 0.0);

        let back: Build = serde_json::from_value(json).unwrap();
        assert_eq!(back, build);
    }
}
