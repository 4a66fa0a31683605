// Expanding Cards
// TUI deck where activating a card expands it and collapses the previous one

// IMPORTS ------------------>>

use anyhow::Result;
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{error, info};

use expanding_cards::logging::{init_logging, DEFAULT_LOG_FILE};
use expanding_cards::ui::{enter_screen, leave_screen, run_app};
use expanding_cards::App;

//--------------------------------------------------------<<

/// Expanding Cards - one card open at a time
#[derive(Parser, Debug)]
#[command(name = "expanding-cards")]
#[command(about = "Terminal deck where the selected card expands")]
struct Args {
    /// Deck file (defaults to the config.yaml shipped with the crate)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    // Load the deck before touching the terminal so errors print normally
    let mut app = App::load(args.config)?;

    let mouse_enabled = app.config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal(mouse_enabled) {
        Ok(terminal) => terminal,
        Err(e) => {
            // Leave the shell usable if setup fails halfway
            let _ = disable_raw_mode();
            let _ = leave_screen(&mut io::stdout(), mouse_enabled);
            return Err(e.context("setting up terminal"));
        }
    };

    info!(cards = app.cards.len(), mouse_enabled, "starting");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut(), mouse_enabled)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("event loop failed: {:#}", e);
    }
    result
}

/// Enter the alternate screen, capturing the mouse only when enabled
fn setup_terminal(mouse_enabled: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enter_screen(&mut stdout, mouse_enabled)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}
