// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_deck, Styles};
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Card row
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_main_content(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the card row inside a one-cell margin
fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    render_deck(f, app, inner);
}

/// Render the footer bar: bindings, then status text
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for binding in &app.bindings {
        spans.push(Span::styled(binding.key.as_str(), Styles::footer_key()));
        spans.push(Span::raw(": "));
        spans.push(Span::raw(binding.description.as_str()));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::raw(app.status_text.as_str()));

    let footer = Paragraph::new(Line::from(spans))
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
