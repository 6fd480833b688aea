// List rendering for categories and projects.
// Provides styled list views with loading, empty, and error states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::catalog::{Category, Project, Tier};
use crate::state::{LoadingState, SelectableList};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Compact count, e.g. 185000 -> "185k", 1500000 -> "1.5M".
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{}k", n / 1000)
    } else if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Legendary => Color::Yellow,
        Tier::Domain => Color::Cyan,
        Tier::Rising => Color::Green,
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn highlighted(list: List<'_>) -> List<'_> {
    list.highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ")
}

/// Render categories list.
pub fn render_categories_list(frame: &mut Frame, list: &mut SelectableList<Category>, area: Rect) {
    let Some(data) = list.data.data() else {
        return render_empty(frame, area, "No categories");
    };
    if data.is_empty() {
        return render_empty(frame, area, "The catalog is empty");
    }

    let items: Vec<ListItem> = data
        .iter()
        .map(|category| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", category.icon)),
                Span::styled(category.name.clone(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {}", category.tier.title()),
                    Style::default().fg(tier_color(category.tier)),
                ),
                Span::styled(
                    format!("  {} projects", category.projects.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_widget =
        highlighted(List::new(items).block(Block::default().borders(Borders::ALL).title(" Categories ")));
    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

/// Render a list of projects under the given title.
pub fn render_projects_list(
    frame: &mut Frame,
    list: &mut SelectableList<Project>,
    area: Rect,
    title: &str,
    empty_message: &str,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, empty_message),
        LoadingState::Loading => render_loading(frame, area, "Loading repositories"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(data) if data.is_empty() => render_empty(frame, area, empty_message),
        LoadingState::Loaded(data) => {
            let items: Vec<ListItem> = data
                .iter()
                .map(|project| {
                    ListItem::new(Line::from(vec![
                        Span::styled(project.full_name(), Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!("  ★ {}", format_count(project.stars)),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(
                            format!("  {}", project.language),
                            Style::default().fg(Color::Magenta),
                        ),
                    ]))
                })
                .collect();

            let list_widget = highlighted(
                List::new(items).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ({}) ", title, data.len())),
                ),
            );
            frame.render_stateful_widget(list_widget, area, &mut list.list_state);
        }
    }
}

/// Render details for the selected project.
pub fn render_project_detail(frame: &mut Frame, project: Option<&Project>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Details ");

    let Some(project) = project else {
        frame.render_widget(block, area);
        return;
    };

    let mut stats = vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::raw(project.stars.to_string()),
    ];
    if let Some(forks) = project.forks {
        stats.push(Span::styled("  ⑂ ", Style::default().fg(Color::DarkGray)));
        stats.push(Span::raw(forks.to_string()));
    }
    if let Some(age) = project.age {
        stats.push(Span::styled("  age ", Style::default().fg(Color::DarkGray)));
        stats.push(Span::raw(format!("{}y", age)));
    }

    let lines = vec![
        Line::from(project.description.clone()),
        Line::from(stats),
        Line::from(Span::styled(
            project.url.clone(),
            Style::default().fg(Color::Blue),
        )),
    ];

    let text = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}
