// Selectable list state shared by all tabs.
// Tracks loading status and keyboard selection for a list of items.

use ratatui::widgets::ListState;

/// Loading state for data that may come from the network.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.data().map_or(0, Vec::len)
    }

    /// Select the next item, stopping at the end.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item, stopping at the start.
    pub fn select_prev(&mut self) {
        if self.len() == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.data.data()?.get(index)
    }

    /// Select the first item, or nothing if the list is empty.
    pub fn reset_selection(&mut self) {
        let first = if self.len() > 0 { Some(0) } else { None };
        self.list_state.select(first);
    }

    pub fn set_loaded(&mut self, items: Vec<T>) {
        self.data = LoadingState::Loaded(items);
        self.reset_selection();
    }

    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
    }

    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut list = SelectableList::new();
        list.set_loaded(vec!["a", "b", "c"]);
        assert_eq!(list.selected_item(), Some(&"a"));

        list.select_prev();
        assert_eq!(list.selected_item(), Some(&"a"));

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_item(), Some(&"c"));
    }

    #[test]
    fn test_empty_and_error_states() {
        let mut list: SelectableList<u32> = SelectableList::new();
        list.select_next();
        assert!(list.selected_item().is_none());

        list.set_loaded(Vec::new());
        assert_eq!(list.list_state.selected(), None);

        list.set_loading();
        assert!(list.data.is_loading());

        list.set_error("boom".to_string());
        assert_eq!(list.len(), 0);
        assert!(list.selected_item().is_none());
    }
}
