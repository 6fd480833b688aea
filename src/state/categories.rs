// Categories tab state.
// Browses the catalog: category list, then the projects of one category.

use crate::catalog::{Catalog, Category, Project};

use super::lists::SelectableList;
use super::navigation::{NavigationStack, ViewLevel};

#[derive(Debug, Default)]
pub struct CategoriesTabState {
    pub nav: NavigationStack,
    pub categories: SelectableList<Category>,
    pub projects: SelectableList<Project>,
}

impl CategoriesTabState {
    pub fn new(catalog: &Catalog) -> Self {
        let mut state = Self::default();
        state.categories.set_loaded(catalog.categories().to_vec());
        state
    }

    pub fn select_next(&mut self) {
        match self.nav.current() {
            ViewLevel::Categories => self.categories.select_next(),
            ViewLevel::Projects { .. } => self.projects.select_next(),
        }
    }

    pub fn select_prev(&mut self) {
        match self.nav.current() {
            ViewLevel::Categories => self.categories.select_prev(),
            ViewLevel::Projects { .. } => self.projects.select_prev(),
        }
    }

    /// Open the selected category. Returns false when already at the project level.
    pub fn drill_down(&mut self) -> bool {
        if !matches!(self.nav.current(), ViewLevel::Categories) {
            return false;
        }
        let Some(category) = self.categories.selected_item().cloned() else {
            return false;
        };

        self.projects.set_loaded(category.projects);
        self.nav.push(ViewLevel::Projects {
            category_id: category.id,
            name: category.name,
        });
        true
    }

    pub fn go_back(&mut self) -> bool {
        self.nav.pop()
    }

    /// Project under the cursor, if the project list is showing.
    pub fn selected_project(&self) -> Option<&Project> {
        match self.nav.current() {
            ViewLevel::Projects { .. } => self.projects.selected_item(),
            ViewLevel::Categories => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_down_and_back() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = CategoriesTabState::new(&catalog);
        assert_eq!(state.categories.len(), catalog.categories().len());
        assert!(state.selected_project().is_none());

        assert!(state.drill_down());
        assert!(!state.drill_down());
        assert_eq!(
            state.nav.current(),
            &ViewLevel::Projects {
                category_id: "foundations".to_string(),
                name: "Foundations & Core Tools".to_string(),
            }
        );
        assert_eq!(state.selected_project().map(|p| p.name.as_str()), Some("linux"));

        state.select_next();
        assert_eq!(state.selected_project().map(|p| p.name.as_str()), Some("git"));

        assert!(state.go_back());
        assert!(!state.go_back());
    }
}
