// Catalog data types.
// Mirrors the JSON layout of the curated dataset.

use serde::{Deserialize, Serialize};

/// A curated (or trending) open-source project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub description: String,
    pub stars: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    #[serde(default)]
    pub language: String,
    pub url: String,
    /// Years since first release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl Project {
    /// `owner/name`, as shown on GitHub.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Ranking tier of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Legendary,
    Domain,
    Rising,
}

impl Tier {
    pub fn title(&self) -> &'static str {
        match self {
            Tier::Legendary => "Legendary",
            Tier::Domain => "Domain",
            Tier::Rising => "Rising",
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legendary" => Ok(Tier::Legendary),
            "domain" => Ok(Tier::Domain),
            "rising" => Ok(Tier::Rising),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}

/// A named group of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    pub projects: Vec<Project>,
}
