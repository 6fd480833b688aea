// App state and main event loop.
// Manages tabs, per-tab state, and keyboard input handling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Project};
use crate::github::{GitHubClient, RateLimit};
use crate::state::{
    CategoriesTabState, ConsoleLevel, ConsoleMessage, SearchTabState, TrendingTabState,
};
use crate::trending::{TimeRange, TrendingService};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Categories,
    Search,
    Trending,
    Console,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Categories, Tab::Search, Tab::Trending, Tab::Console];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Categories => "Categories",
            Tab::Search => "Search",
            Tab::Trending => "Trending",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Categories => Tab::Search,
            Tab::Search => Tab::Trending,
            Tab::Trending => Tab::Console,
            Tab::Console => Tab::Categories,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Categories => Tab::Console,
            Tab::Search => Tab::Categories,
            Tab::Trending => Tab::Search,
            Tab::Console => Tab::Trending,
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    pub catalog: Catalog,
    pub categories: CategoriesTabState,
    pub search: SearchTabState,
    pub trending: TrendingTabState,
    trending_service: TrendingService<GitHubClient>,
    /// Activity log shown in the Console tab.
    pub console_messages: Vec<ConsoleMessage>,
    pub console_list_state: ListState,
    /// Number of unread console errors (for badge).
    pub console_unread: usize,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, client: GitHubClient) -> Self {
        let categories = CategoriesTabState::new(&catalog);
        let mut app = Self {
            active_tab: Tab::default(),
            categories,
            search: SearchTabState::default(),
            trending: TrendingTabState::default(),
            trending_service: TrendingService::new(client),
            console_messages: Vec::new(),
            console_list_state: ListState::default(),
            console_unread: 0,
            show_help: false,
            should_quit: false,
            catalog,
        };

        app.log(ConsoleMessage::info(format!(
            "Loaded {} projects in {} categories",
            app.catalog.project_count(),
            app.catalog.categories().len(),
        )));
        if !app.trending_service.source().is_authenticated() {
            app.log(ConsoleMessage::warn(
                "GITHUB_TOKEN not set; trending requests are anonymous and heavily rate limited",
            ));
        }
        app
    }

    pub fn rate_limit(&self) -> &RateLimit {
        self.trending_service.source().rate_limit()
    }

    /// Number of trending responses held in the cache.
    pub fn cache_entries(&self) -> usize {
        self.trending_service.cache().len()
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            // Draw the loading state first, then block on the request.
            if self.trending.pending {
                self.load_trending().await;
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    async fn load_trending(&mut self) {
        let range = self.trending.range.clone();
        let response = self.trending_service.fetch(&range).await;

        match &response.error {
            Some(error) => self.log(ConsoleMessage::error(format!(
                "Trending ({}) unavailable: {}",
                range, error
            ))),
            None => self.log(ConsoleMessage::info(format!(
                "Trending ({}): {} repositories",
                range,
                response.projects.len()
            ))),
        }
        self.trending.apply(response);
    }

    /// Add a console message, counting unread errors and warnings.
    pub fn log(&mut self, message: ConsoleMessage) {
        if message.level != ConsoleLevel::Info && self.active_tab != Tab::Console {
            self.console_unread += 1;
        }
        self.console_messages.push(message);
    }

    /// Project under the cursor in the active tab.
    pub fn selected_project(&self) -> Option<&Project> {
        match self.active_tab {
            Tab::Categories => self.categories.selected_project(),
            Tab::Search => self.search.selected_project(),
            Tab::Trending => self.trending.selected_project(),
            Tab::Console => None,
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The search input swallows everything while it is focused.
        if self.active_tab == Tab::Search && self.search.editing {
            self.handle_search_input(key.code);
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            code => match self.active_tab {
                Tab::Categories => self.handle_categories_key(code),
                Tab::Search => self.handle_search_key(code),
                Tab::Trending => self.handle_trending_key(code),
                Tab::Console => {}
            },
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        match tab {
            Tab::Console => self.console_unread = 0,
            Tab::Trending => self.trending.ensure_loaded(),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        match self.active_tab {
            Tab::Categories => self.categories.select_next(),
            Tab::Search => self.search.results.select_next(),
            Tab::Trending => self.trending.projects.select_next(),
            Tab::Console => {
                let last = self.console_messages.len().saturating_sub(1);
                let i = self.console_list_state.selected().map_or(0, |i| (i + 1).min(last));
                self.console_list_state.select(Some(i));
            }
        }
    }

    fn select_prev(&mut self) {
        match self.active_tab {
            Tab::Categories => self.categories.select_prev(),
            Tab::Search => self.search.results.select_prev(),
            Tab::Trending => self.trending.projects.select_prev(),
            Tab::Console => {
                let i = self
                    .console_list_state
                    .selected()
                    .map_or(0, |i| i.saturating_sub(1));
                self.console_list_state.select(Some(i));
            }
        }
    }

    fn handle_categories_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                self.categories.drill_down();
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                self.categories.go_back();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Enter) {
            self.search.start_editing();
        }
    }

    fn handle_search_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let count = self.search.submit(&self.catalog);
                if !self.search.last_query.is_empty() {
                    self.log(ConsoleMessage::info(format!(
                        "Search \"{}\": {} of {} projects",
                        self.search.last_query, count, self.search.total_projects
                    )));
                }
            }
            KeyCode::Esc => self.search.stop_editing(),
            KeyCode::Backspace => self.search.pop_char(),
            KeyCode::Char(c) => self.search.push_char(c),
            _ => {}
        }
    }

    fn handle_trending_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('d') => self.trending.set_range(TimeRange::Daily),
            KeyCode::Char('w') => self.trending.set_range(TimeRange::Weekly),
            KeyCode::Char('m') => self.trending.set_range(TimeRange::Monthly),
            KeyCode::Char('r') => self.trending.request_load(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            Catalog::builtin().unwrap(),
            GitHubClient::new(None).unwrap(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_tab_cycle() {
        let mut tab = Tab::Categories;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Categories);
        assert_eq!(Tab::Categories.prev(), Tab::Console);
    }

    #[test]
    fn test_search_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Search);

        press(&mut app, KeyCode::Char('/'));
        for c in "python q".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' while typing must not quit
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.search.last_query, "python");
        assert_eq!(
            app.selected_project().map(|p| p.full_name()),
            Some("python/cpython".to_string())
        );
    }

    #[test]
    fn test_opening_trending_queues_load() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Trending);
        assert!(app.trending.pending);
    }

    #[test]
    fn test_categories_drill_down() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.selected_project().map(|p| p.name.as_str()),
            Some("linux")
        );
        press(&mut app, KeyCode::Esc);
        assert!(app.selected_project().is_none());
    }

    #[test]
    fn test_anonymous_access_is_a_warning() {
        let mut app = app();
        assert_eq!(app.console_unread, 1);
        assert!(
            app.console_messages
                .iter()
                .any(|m| m.level == ConsoleLevel::Warn && m.message.contains("GITHUB_TOKEN"))
        );

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Console);
        assert_eq!(app.console_unread, 0);
    }

    #[test]
    fn test_authenticated_start_has_no_warning() {
        let app = App::new(
            Catalog::builtin().unwrap(),
            GitHubClient::new(Some("ghp_test")).unwrap(),
        );
        assert_eq!(app.console_unread, 0);
        assert!(app.console_messages.iter().all(|m| m.level == ConsoleLevel::Info));
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
