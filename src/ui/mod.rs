// UI module for rendering the TUI.
// Contains widgets for tabs, headers, project lists, and the console.

mod breadcrumb;
mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::{ConsoleLevel, ViewLevel};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_header(frame, app, chunks[1]);
    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab {
        Tab::Categories => {
            breadcrumb::draw_breadcrumb(frame, &app.categories.nav.breadcrumbs(), area);
        }
        Tab::Search => {
            let line = if app.search.editing {
                Line::from(vec![
                    Span::styled("/", Style::default().fg(Color::Yellow)),
                    Span::raw(app.search.input.clone()),
                    Span::styled("█", Style::default().fg(Color::Yellow)),
                ])
            } else if app.search.last_query.is_empty() {
                Line::from(Span::styled(
                    format!(
                        "Press / to search {} projects by name, owner, language, or description",
                        app.catalog.project_count()
                    ),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(vec![
                    Span::styled("Results for ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("\"{}\"", app.search.last_query),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            };
            breadcrumb::draw_header(frame, line, None, area);
        }
        Tab::Trending => {
            let mut spans = Vec::new();
            for (key, range) in [("d", "daily"), ("w", "weekly"), ("m", "monthly")] {
                let style = if app.trending.range.as_str() == range {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("[{}] {}  ", key, range), style));
            }
            let timestamp = app.trending.cached_at.map(|ts| ("fetched", ts));
            breadcrumb::draw_header(frame, Line::from(spans), timestamp, area);
        }
        Tab::Console => {
            breadcrumb::draw_header(frame, Line::default(), None, area);
        }
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.active_tab == Tab::Console {
        draw_console_tab(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(area);

    match app.active_tab {
        Tab::Categories => match app.categories.nav.current().clone() {
            ViewLevel::Categories => {
                list::render_categories_list(frame, &mut app.categories.categories, chunks[0]);
                let description = app
                    .categories
                    .categories
                    .selected_item()
                    .map(|c| c.description.clone())
                    .unwrap_or_default();
                let text = Paragraph::new(description)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::DarkGray))
                            .title(" About "),
                    );
                frame.render_widget(text, chunks[1]);
                return;
            }
            ViewLevel::Projects { name, .. } => {
                list::render_projects_list(
                    frame,
                    &mut app.categories.projects,
                    chunks[0],
                    &name,
                    "No projects in this category",
                );
            }
        },
        Tab::Search => {
            let empty = if app.search.last_query.is_empty() {
                "Type a query to search the catalog"
            } else {
                "No matching projects"
            };
            list::render_projects_list(frame, &mut app.search.results, chunks[0], "Results", empty);
        }
        Tab::Trending => {
            let title = format!("Trending {}", app.trending.range);
            list::render_projects_list(
                frame,
                &mut app.trending.projects,
                chunks[0],
                &title,
                "No repositories passed the quality filter",
            );
        }
        Tab::Console => {}
    }

    list::render_project_detail(frame, app.selected_project(), chunks[1]);
}

/// Draw the Console tab with activity messages.
fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if app.console_messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    // Newest first
    let items: Vec<ListItem> = app
        .console_messages
        .iter()
        .rev()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("❌", Color::Red),
                ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                ConsoleLevel::Info => ("ℹ️", Color::Cyan),
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    list::format_relative_time(&msg.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut app.console_list_state);
}

/// Draw the status bar with keybinding hints, rate limit, and cache size.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str, label: &'static str| {
        [
            Span::raw(k),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut hints: Vec<Span> = Vec::new();
    if app.active_tab == Tab::Search && app.search.editing {
        hints.extend(key(" ↵ ", "Search"));
        hints.extend(key("  Esc ", "Cancel"));
    } else {
        hints.extend(key(" ↑↓ ", "Navigate"));
        match app.active_tab {
            Tab::Categories => {
                hints.extend(key("  ↵ ", "Open"));
                hints.extend(key("  Esc ", "Back"));
            }
            Tab::Search => hints.extend(key("  / ", "Query")),
            Tab::Trending => {
                hints.extend(key("  d/w/m ", "Range"));
                hints.extend(key("  r ", "Refresh"));
            }
            Tab::Console => {}
        }
        hints.extend(key("  Tab ", "Switch"));
        hints.extend(key("  ? ", "Help"));
        hints.extend(key("  q ", "Quit"));
    }

    let rate = app.rate_limit();
    if rate.limit > 0 {
        let rate_color = if rate.remaining < 5 {
            Color::Red
        } else if rate.remaining < 20 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }
    if app.cache_entries() > 0 {
        hints.push(Span::styled(
            format!("  cache: {}", app.cache_entries()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 50.min(area.width);
    let popup_height = 17.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let shortcut = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut("↑/↓ or j/k", "Navigate list"),
        shortcut("Enter", "Open category"),
        shortcut("Esc", "Go back / close help"),
        shortcut("Tab", "Switch tabs"),
        shortcut("/", "Edit search query"),
        shortcut("d / w / m", "Trending: daily, weekly, monthly"),
        shortcut("r", "Refresh trending"),
        shortcut("?", "Show/hide this help"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help_paragraph, popup_area);
}
