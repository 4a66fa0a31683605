// Application State
// Card deck state, focus tracking and event dispatch

use anyhow::{Context, Result};
use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info};

use super::{ActiveElementToggler, AppConfig, AppEvent, Card};
use crate::config::{BindingConfigYaml, DeckConfig};
use crate::config_validation::load_and_validate_config;

/// Shared handle to a card owned by the deck
pub type CardRef = Rc<RefCell<Card>>;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Window title from the deck file
    pub title: String,

    /// Footer bindings from the deck file
    pub bindings: Vec<BindingConfigYaml>,

    /// Footer status text
    pub status_text: String,

    /// Cards in display order
    pub cards: Vec<CardRef>,

    /// Single-active tracking over `cards`
    toggler: ActiveElementToggler<CardRef>,

    /// Index of the card with keyboard focus
    pub focused: usize,

    /// Screen rects of the cards from the last draw, parallel to `cards`
    pub card_rects: Vec<Rect>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create an application from a parsed deck
    pub fn new(deck: DeckConfig, config: AppConfig) -> Self {
        let cards = deck
            .build_cards()
            .into_iter()
            .map(|card| Rc::new(RefCell::new(card)))
            .collect();

        Self {
            config,
            title: deck.application.title,
            bindings: deck.application.bindings,
            status_text: deck.application.status_bar.default_text,
            cards,
            toggler: ActiveElementToggler::new(),
            focused: 0,
            card_rects: Vec::new(),
            should_quit: false,
        }
    }

    /// Load the deck file and create an application from it
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let deck = load_and_validate_config(config_path).context("loading card deck")?;
        Ok(Self::new(deck, AppConfig::default()))
    }

    /// Dispatch one application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::FocusNext => self.focus_next(),
            AppEvent::FocusPrevious => self.focus_previous(),
            AppEvent::ActivateFocused => self.activate_focused(),
            AppEvent::ActivateAt { column, row } => {
                self.activate_at(column, row);
            }
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    /// Expand the card at `index`, collapsing the previous one
    pub fn activate(&mut self, index: usize) {
        let Some(card) = self.cards.get(index) else {
            debug!(index, "activate ignored, no such card");
            return;
        };

        self.toggler.toggle(card);
        self.focused = index;

        let card = card.borrow();
        self.status_text = format!("{} expanded", card.title);
        info!(id = %card.id, "card activated");
    }

    /// Expand the card under a screen position, returning its index
    pub fn activate_at(&mut self, column: u16, row: u16) -> Option<usize> {
        let index = self.card_at(column, row)?;
        self.activate(index);
        Some(index)
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.focused);
    }

    /// Index of the card drawn at a screen position
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_rects.iter().position(|rect| rect.contains(position))
    }

    pub fn focus_next(&mut self) {
        if !self.cards.is_empty() {
            self.focused = (self.focused + 1) % self.cards.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.cards.is_empty() {
            self.focused = if self.focused == 0 {
                self.cards.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    /// Index of the active card, if any
    pub fn active_index(&self) -> Option<usize> {
        self.cards.iter().position(|card| self.toggler.is_active(card))
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::core::element::{COLLAPSED_WIDTH, EXPANDED_WIDTH};
    use std::path::Path;

    fn app() -> App {
        let yaml = r#"
application:
  title: "Deck"
  status_bar:
    default_text: "ready"
cards:
  - { id: a, title: A }
  - { id: b, title: B }
  - { id: c, title: C }
"#;
        let deck = parse_config(yaml, Path::new("deck.yaml")).unwrap();
        App::new(deck, AppConfig::default())
    }

    fn widths(app: &App) -> Vec<u16> {
        app.cards.iter().map(|c| c.borrow().width).collect()
    }

    #[test]
    fn test_starts_with_nothing_active() {
        let app = app();

        assert_eq!(app.active_index(), None);
        assert_eq!(widths(&app), vec![COLLAPSED_WIDTH; 3]);
        assert_eq!(app.status_text, "ready");
    }

    #[test]
    fn test_activate_switches_cards() {
        let mut app = app();

        app.activate(0);
        app.activate(2);

        assert_eq!(app.active_index(), Some(2));
        assert_eq!(widths(&app), vec![COLLAPSED_WIDTH, COLLAPSED_WIDTH, EXPANDED_WIDTH]);
        assert_eq!(app.focused, 2);
        assert_eq!(app.status_text, "C expanded");
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut app = app();

        app.activate(1);
        app.activate(9);

        assert_eq!(app.active_index(), Some(1));
    }

    #[test]
    fn test_activate_same_card_twice_stays_expanded() {
        let mut app = app();

        app.handle_event(AppEvent::ActivateFocused);
        app.handle_event(AppEvent::ActivateFocused);

        assert_eq!(app.active_index(), Some(0));
        assert!(app.cards[0].borrow().is_active());
        assert_eq!(widths(&app)[0], EXPANDED_WIDTH);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = app();

        app.handle_event(AppEvent::FocusPrevious);
        assert_eq!(app.focused, 2);
        app.handle_event(AppEvent::FocusNext);
        assert_eq!(app.focused, 0);

        // focus alone never expands
        assert_eq!(app.active_index(), None);
    }

    #[test]
    fn test_activate_at_uses_rendered_rects() {
        let mut app = app();
        app.card_rects = vec![
            Rect::new(0, 2, 10, 5),
            Rect::new(11, 2, 10, 5),
            Rect::new(22, 2, 10, 5),
        ];

        assert_eq!(app.activate_at(15, 3), Some(1));
        assert_eq!(app.active_index(), Some(1));

        // gap between cards
        assert_eq!(app.activate_at(10, 3), None);
        assert_eq!(app.active_index(), Some(1));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
