//! The immutable list of parts the engine picks from.

use std::collections::HashSet;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::schemas::computing::{Category, Component};

/// An ordered, validated, read-only list of [`Component`]s.
///
/// Catalog order matters: it breaks ties when two parts have the same value ratio.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    components: Vec<Component>,
}

/// Catalog documents come either as a bare array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Component>),
    Wrapped { components: Vec<Component> },
}

impl Catalog {
    /// Build a catalog, checking that ids are unique, prices are finite and
    /// non-negative, and every rating is within `[0, 100]`.
    ///
    /// # Errors
    /// Errors naming the first component that breaks one of those rules.
    pub fn new(components: Vec<Component>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for component in &components {
            ensure!(
                seen.insert(component.id.as_str()),
                "duplicate component id {:?}",
                component.id
            );
            ensure!(
                component.price.is_finite() && component.price >= 0.0,
                "component {:?} has an invalid price of {}",
                component.id,
                component.price
            );
            for (usage, rating) in component.performance.iter() {
                ensure!(
                    rating.is_finite() && (0.0..=100.0).contains(&rating),
                    "component {:?} rates {} for {}, outside of [0, 100]",
                    component.id,
                    rating,
                    usage
                );
            }
        }
        Ok(Self { components })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).context("could not parse catalog JSON")?;
        let components = match document {
            CatalogDocument::Bare(components) => components,
            CatalogDocument::Wrapped { components } => components,
        };
        Self::new(components)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter()
    }

    /// Parts of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Component> + '_ {
        self.components
            .iter()
            .filter(move |c| c.category == category)
    }

    /// Look a part up by id, in any category.
    pub fn find(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
