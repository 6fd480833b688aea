// Navigation state for the Categories tab.
// Handles the drill-down stack and breadcrumb trail.

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
}

/// The current view level in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLevel {
    /// Top level: all categories
    Categories,
    /// Projects within one category
    Projects { category_id: String, name: String },
}

impl ViewLevel {
    pub fn to_breadcrumb(&self) -> BreadcrumbNode {
        let label = match self {
            ViewLevel::Categories => "Categories".to_string(),
            ViewLevel::Projects { name, .. } => name.clone(),
        };
        BreadcrumbNode { label }
    }
}

/// Navigation stack for a tab. Never empty.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    root: ViewLevel,
    stack: Vec<ViewLevel>,
}

impl NavigationStack {
    pub fn new(root: ViewLevel) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Get the current view level.
    pub fn current(&self) -> &ViewLevel {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Push a new view level onto the stack (drill down).
    pub fn push(&mut self, level: ViewLevel) {
        self.stack.push(level);
    }

    /// Pop the current view level (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        std::iter::once(&self.root)
            .chain(self.stack.iter())
            .map(ViewLevel::to_breadcrumb)
            .collect()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(ViewLevel::Categories)
    }
}
