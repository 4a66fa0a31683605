// Core infrastructure module
// Single-active toggling plus the deck state built on top of it

pub mod app;
pub mod app_config;
pub mod card;
pub mod element;
pub mod events;
pub mod toggler;

pub use app::{App, CardRef};
pub use app_config::AppConfig;
pub use card::Card;
pub use element::{ClassList, Element, ElementRef, ACTIVE_CLASS, COLLAPSED_WIDTH, EXPANDED_WIDTH};
pub use events::{AppEvent, EventHandler};
pub use toggler::{ActiveElementToggler, SharedToggler};
