// Curated project catalog.
// Loads the category dataset and provides read-only lookups over it.

mod types;

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use types::{Category, Project, Tier};

/// Dataset compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Default number of projects returned by [`Catalog::featured`].
pub const FEATURED_LIMIT: usize = 8;

/// Ordered collection of categories, each holding an ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Load a catalog file with the same layout as the builtin dataset.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the catalog as pretty JSON, atomically via a temp file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All projects, in category order then within-category order.
    /// Cross-listed projects appear once per category.
    pub fn projects(&self) -> Vec<&Project> {
        self.categories
            .iter()
            .flat_map(|c| c.projects.iter())
            .collect()
    }

    /// Number of entries in [`Catalog::projects`].
    pub fn project_count(&self) -> usize {
        self.categories.iter().map(|c| c.projects.len()).sum()
    }

    pub fn project(&self, owner: &str, name: &str) -> Option<&Project> {
        self.categories
            .iter()
            .flat_map(|c| c.projects.iter())
            .find(|p| p.owner == owner && p.name == name)
    }

    /// Most-starred projects, ties kept in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&Project> {
        let mut projects = self.projects();
        projects.sort_by(|a, b| b.stars.cmp(&a.stars));
        projects.truncate(limit);
        projects
    }

    pub fn by_tier(&self, tier: Tier) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.tier == tier).collect()
    }

    pub(crate) fn projects_mut(&mut self) -> impl Iterator<Item = &mut Project> {
        self.categories.iter_mut().flat_map(|c| c.projects.iter_mut())
    }
}
