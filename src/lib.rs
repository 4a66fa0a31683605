// Expanding Cards Library
// Single-active expanding card toggle and a terminal deck that hosts it

// Core infrastructure - toggler, element seams and application state
pub mod core;

// Deck file loading and validation
pub mod config;
pub mod config_validation;

// UI - TUI views and event loop
pub mod ui;

// Log file setup
pub mod logging;

// Re-export commonly used items for convenience
pub use crate::core::{
    ActiveElementToggler, App, AppConfig, Card, Element, ElementRef, SharedToggler,
    ACTIVE_CLASS, COLLAPSED_WIDTH, EXPANDED_WIDTH,
};
pub use crate::config::{ConfigError, DeckConfig};
