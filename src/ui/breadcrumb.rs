// Header line rendering.
// Breadcrumb trail for Categories, context lines for the other tabs.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::BreadcrumbNode;

/// Format timestamp for display in local time.
fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let local: DateTime<chrono::Local> = dt.with_timezone(&chrono::Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render the breadcrumb trail.
pub fn draw_breadcrumb(frame: &mut Frame, breadcrumbs: &[BreadcrumbNode], area: Rect) {
    let mut spans = Vec::new();

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == breadcrumbs.len() - 1 {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(node.label.clone(), style));
    }

    draw_header(frame, Line::from(spans), None, area);
}

/// Render a header line with an optional timestamp on the right.
pub fn draw_header(
    frame: &mut Frame,
    line: Line,
    timestamp: Option<(&str, DateTime<Utc>)>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);

    if let Some((label, ts)) = timestamp {
        let text = Line::from(vec![
            Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format_timestamp(&ts), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Right), inner);
    }
}
