// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move keyboard focus to the next card
    FocusNext,

    /// Move keyboard focus to the previous card
    FocusPrevious,

    /// Expand the focused card
    ActivateFocused,

    /// Expand the card under a screen position
    ActivateAt { column: u16, row: u16 },

    /// Terminal size changed
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler {
    mouse_enabled: bool,
}

impl EventHandler {
    pub fn new(mouse_enabled: bool) -> Self {
        Self { mouse_enabled }
    }

    /// Convert a crossterm event to an application event
    pub fn handle(&self, event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) if self.mouse_enabled => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::FocusPrevious,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::FocusNext,

            // Expand
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::ActivateFocused,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::ActivateAt {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
