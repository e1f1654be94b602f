use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DeserializeFromStr, PickFirst, SerializeDisplay};

use crate::common::IgnoreComma;

/// The hardware role a part fills in a build.
#[derive(
    SerializeDisplay, DeserializeFromStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Case,
    Cooling,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Cpu,
        Self::Gpu,
        Self::Motherboard,
        Self::Ram,
        Self::Storage,
        Self::Psu,
        Self::Case,
        Self::Cooling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Motherboard => "motherboard",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Psu => "psu",
            Self::Case => "case",
            Self::Cooling => "cooling",
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|c| c.as_str() == wanted) {
            Some(category) => Ok(*category),
            None => bail!("no such component category: {:?}", s),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A workload profile that parts are rated against.
#[derive(
    SerializeDisplay, DeserializeFromStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum UsageType {
    Gaming,
    Office,
    ContentCreation,
    Programming,
    Streaming,
    General,
}

impl UsageType {
    pub const ALL: [UsageType; 6] = [
        Self::Gaming,
        Self::Office,
        Self::ContentCreation,
        Self::Programming,
        Self::Streaming,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Office => "office",
            Self::ContentCreation => "content-creation",
            Self::Programming => "programming",
            Self::Streaming => "streaming",
            Self::General => "general",
        }
    }
}

impl FromStr for UsageType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(|c: char| c == '_' || c == ' ', "-");
        match Self::ALL.iter().find(|u| u.as_str() == wanted) {
            Some(usage) => Ok(*usage),
            None => bail!("no such usage type: {:?}", s),
        }
    }
}

impl Display for UsageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rating in `[0, 100]` per [`UsageType`].
///
/// Every field is required, so a catalog entry that leaves out a usage type
/// fails to deserialize instead of silently scoring zero.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Performance {
    pub gaming: f64,
    pub office: f64,
    pub content_creation: f64,
    pub programming: f64,
    pub streaming: f64,
    pub general: f64,
}

impl Performance {
    pub fn uniform(rating: f64) -> Self {
        Self {
            gaming: rating,
            office: rating,
            content_creation: rating,
            programming: rating,
            streaming: rating,
            general: rating,
        }
    }

    pub fn get(&self, usage: UsageType) -> f64 {
        match usage {
            UsageType::Gaming => self.gaming,
            UsageType::Office => self.office,
            UsageType::ContentCreation => self.content_creation,
            UsageType::Programming => self.programming,
            UsageType::Streaming => self.streaming,
            UsageType::General => self.general,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (UsageType, f64)> + '_ {
        UsageType::ALL.iter().map(move |u| (*u, self.get(*u)))
    }
}

/// A display-only technical detail, e.g. `cores: 14` or `socket: "AM5"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl Display for SpecValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// One purchasable part.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde_as(as = "PickFirst<(_, IgnoreComma<f64>)>")]
    pub price: f64,
    pub performance: Performance,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: BTreeMap<String, SpecValue>,
}

impl Component {
    pub fn rating(&self, usage: UsageType) -> f64 {
        self.performance.get(usage)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Category, Component, SpecValue, UsageType};

    #[test]
    fn test_category_names() {
        for category in Category::ALL.iter() {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), *category);
        }
        assert_eq!(Category::from_str(" PSU ").unwrap(), Category::Psu);
        assert!(Category::from_str("monitor").is_err());
    }

    #[test]
    fn test_usage_names() {
        assert_eq!(
            UsageType::from_str("content-creation").unwrap(),
            UsageType::ContentCreation
        );
        assert_eq!(
            UsageType::from_str("Content Creation").unwrap(),
            UsageType::ContentCreation
        );
        assert_eq!(UsageType::ContentCreation.to_string(), "content-creation");
        assert!(UsageType::from_str("mining").is_err());
    }

    #[test]
    fn test_component_from_json() {
        let json = r#"{
            "id": "gpu-3",
            "type": "gpu",
            "name": "GeForce RTX 4080 Super",
            "brand": "NVIDIA",
            "price": "1,099",
            "performance": {
                "gaming": 95,
                "office": 85,
                "content-creation": 90,
                "programming": 85,
                "streaming": 95,
                "general": 90
            },
            "specs": { "vram": 16, "memoryType": "GDDR6X" }
        }"#;
        let gpu: Component = serde_json::from_str(json).unwrap();
        assert_eq!(gpu.category, Category::Gpu);
        assert_eq!(gpu.price, 1099.0);
        assert_eq!(gpu.rating(UsageType::ContentCreation), 90.0);
        assert_eq!(gpu.specs["vram"], SpecValue::Number(16.0));
        assert_eq!(gpu.specs["memoryType"].to_string(), "GDDR6X");
        assert_eq!(gpu.description, "");
    }

    #[test]
    fn test_partial_ratings_rejected() {
        let json = r#"{
            "id": "ram-9",
            "type": "ram",
            "name": "Half Rated",
            "price": 50,
            "performance": { "gaming": 80, "office": 80 }
        }"#;
        assert!(serde_json::from_str::<Component>(json).is_err());
    }

    #[test]
    fn test_category_alias() {
        let json = r#"{
            "id": "case-1",
            "category": "case",
            "name": "Box",
            "price": 70,
            "performance": {
                "gaming": 70, "office": 70, "content-creation": 70,
                "programming": 70, "streaming": 70, "general": 70
            }
        }"#;
        let case: Component = serde_json::from_str(json).unwrap();
        assert_eq!(case.category, Category::Case);
        assert!(case.specs.is_empty());
    }
}
