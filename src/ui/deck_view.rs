// Deck View
// Row of cards drawn at their current widths

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::Styles;
use crate::core::app_config::UiSettings;
use crate::core::App;

/// Place cards left to right, clipping at the right edge of `area`
///
/// Returned rects are parallel to `widths`; a card pushed fully past the edge
/// gets an empty rect so it can never be hit.
pub fn layout_cards(area: Rect, widths: &[u16], ui: &UiSettings) -> Vec<Rect> {
    let right = area.x.saturating_add(area.width);
    let height = ui.card_height.min(area.height);
    let mut x = area.x;

    widths
        .iter()
        .map(|&units| {
            if x >= right {
                return Rect::new(right, area.y, 0, 0);
            }
            let width = ui.units_to_cells(units).min(right - x);
            let rect = Rect::new(x, area.y, width, height);
            x = x.saturating_add(width).saturating_add(ui.gap);
            rect
        })
        .collect()
}

/// Render the card row and remember where each card landed
pub fn render_deck(f: &mut Frame, app: &mut App, area: Rect) {
    let widths: Vec<u16> = app.cards.iter().map(|c| c.borrow().width).collect();
    let rects = layout_cards(area, &widths, &app.config.ui);

    for (index, (card, rect)) in app.cards.iter().zip(&rects).enumerate() {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let card = card.borrow();
        let active = card.is_active();
        let focused = index == app.focused;

        let border_style = if focused {
            Styles::border_focused()
        } else if active {
            Styles::border_active()
        } else {
            Styles::border_unfocused()
        };
        let title_style = if active {
            Styles::card_title_active()
        } else {
            Styles::card_title_inactive()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if active { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style)
            .title(Span::styled(card.title.as_str(), title_style));

        // Body text is part of the expanded treatment only
        let text = if active {
            vec![Line::from(card.body.as_str())]
        } else {
            Vec::new()
        };

        let paragraph = Paragraph::new(text)
            .style(if active { Styles::card_active() } else { Styles::card_inactive() })
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, *rect);
    }

    app.card_rects = rects;
}
