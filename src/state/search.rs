// Search tab state.
// Holds the query being typed and the ranked results of the last run.

use crate::catalog::{Catalog, Project};
use crate::search;

use super::lists::SelectableList;

#[derive(Debug, Default)]
pub struct SearchTabState {
    /// Text in the input line.
    pub input: String,
    /// Whether keystrokes go to the input line.
    pub editing: bool,
    /// Trimmed query of the last completed search.
    pub last_query: String,
    pub total_projects: usize,
    pub results: SelectableList<Project>,
}

impl SearchTabState {
    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Run the typed query against the catalog and leave editing mode.
    /// Returns the number of results.
    pub fn submit(&mut self, catalog: &Catalog) -> usize {
        self.editing = false;
        let response = search::search(catalog, &self.input);
        let count = response.results.len();

        self.last_query = response.query;
        self.total_projects = response.total_projects;
        self.results.set_loaded(response.results);
        count
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.results.selected_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_submit() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = SearchTabState::default();

        state.start_editing();
        for c in "linuxx".chars() {
            state.push_char(c);
        }
        state.pop_char();
        let count = state.submit(&catalog);

        assert!(!state.editing);
        assert!(count > 0);
        assert_eq!(state.last_query, "linux");
        assert_eq!(state.total_projects, catalog.project_count());
        assert_eq!(
            state.selected_project().map(|p| p.owner.as_str()),
            Some("torvalds")
        );
    }

    #[test]
    fn test_blank_submit_clears_results() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = SearchTabState {
            input: "   ".to_string(),
            ..SearchTabState::default()
        };

        assert_eq!(state.submit(&catalog), 0);
        assert!(state.selected_project().is_none());
        assert_eq!(state.total_projects, 114);
    }
}
