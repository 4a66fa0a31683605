// UI module
// TUI views and the main event loop for the card deck

pub mod app_view;
pub mod deck_view;
pub mod styles;
pub mod terminal;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::trace;

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use deck_view::{layout_cards, render_deck};
pub use styles::Styles;
pub use terminal::{enter_screen, leave_screen};

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let handler = EventHandler::new(app.config.ui.mouse_enabled);

    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            let app_event = handler.handle(event);
            trace!(?app_event, "event");

            app.handle_event(app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
