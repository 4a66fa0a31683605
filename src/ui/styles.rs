// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn footer_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // === Cards ===

    pub fn card_active() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(40, 44, 68))
    }

    pub fn card_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn card_title_active() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Border Styles ===

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
