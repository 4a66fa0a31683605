// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for the card deck
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and display settings
    pub ui: UiSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Width units drawn per terminal column
    pub units_per_cell: u16,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Height of the card row in rows
    pub card_height: u16,

    /// Columns between neighbouring cards
    pub gap: u16,
}

impl UiSettings {
    /// Convert a width in host units to terminal columns, never below one column
    pub fn units_to_cells(&self, units: u16) -> u16 {
        (units / self.units_per_cell.max(1)).max(1)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            units_per_cell: compiled::UNITS_PER_CELL,
            mouse_enabled: compiled::MOUSE_ENABLED,
            card_height: compiled::CARD_HEIGHT,
            gap: compiled::GAP,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
        }
    }
}
