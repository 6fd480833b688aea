// State management module.
// Handles navigation, list selection, and per-tab state for the TUI.

pub mod categories;
pub mod console;
pub mod lists;
pub mod navigation;
pub mod search;
pub mod trending;

pub use categories::CategoriesTabState;
pub use console::{ConsoleLevel, ConsoleMessage};
pub use lists::{LoadingState, SelectableList};
pub use navigation::{BreadcrumbNode, NavigationStack, ViewLevel};
pub use search::SearchTabState;
pub use trending::TrendingTabState;
