// Trending tab state.
// Tracks the selected range and the last feed loaded for it.

use chrono::{DateTime, Utc};

use crate::catalog::Project;
use crate::trending::{TimeRange, TrendingResponse};

use super::lists::{LoadingState, SelectableList};

#[derive(Debug, Default)]
pub struct TrendingTabState {
    pub range: TimeRange,
    pub projects: SelectableList<Project>,
    pub cached_at: Option<DateTime<Utc>>,
    /// Set when a load should run on the next loop iteration.
    pub pending: bool,
}

impl TrendingTabState {
    /// Switch range and queue a load. Re-selecting the current range only reloads
    /// if nothing is showing yet.
    pub fn set_range(&mut self, range: TimeRange) {
        if range != self.range || self.projects.data.data().is_none() {
            self.range = range;
            self.request_load();
        }
    }

    pub fn request_load(&mut self) {
        self.projects.set_loading();
        self.pending = true;
    }

    /// Queue the first load when the tab is opened.
    pub fn ensure_loaded(&mut self) {
        if matches!(self.projects.data, LoadingState::Idle) {
            self.request_load();
        }
    }

    pub fn apply(&mut self, response: TrendingResponse) {
        self.pending = false;
        match response.error {
            Some(error) => {
                self.cached_at = None;
                self.projects.set_error(error);
            }
            None => {
                self.cached_at = response.cached_at;
                self.projects.set_loaded(response.projects);
            }
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.selected_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_open_queues_load() {
        let mut state = TrendingTabState::default();
        state.ensure_loaded();
        assert!(state.pending);
        assert!(state.projects.data.is_loading());
    }

    #[test]
    fn test_error_response_is_shown_as_error() {
        let mut state = TrendingTabState::default();
        state.request_load();
        state.apply(TrendingResponse {
            projects: Vec::new(),
            time_range: "weekly".to_string(),
            cached_at: None,
            error: Some("GitHub API error: 403".to_string()),
        });

        assert!(!state.pending);
        assert!(matches!(
            state.projects.data,
            LoadingState::Error(ref e) if e == "GitHub API error: 403"
        ));
    }

    #[test]
    fn test_same_range_does_not_reload_loaded_feed() {
        let mut state = TrendingTabState::default();
        state.apply(TrendingResponse {
            projects: Vec::new(),
            time_range: "weekly".to_string(),
            cached_at: Some(Utc::now()),
            error: None,
        });

        state.set_range(TimeRange::Weekly);
        assert!(!state.pending);

        state.set_range(TimeRange::Daily);
        assert!(state.pending);
        assert_eq!(state.range, TimeRange::Daily);
    }
}
