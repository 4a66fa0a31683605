// Build script - reads the ui: section of config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const UNITS_PER_CELL: u16 = {units_per_cell};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const CARD_HEIGHT: u16 = {card_height};
pub const GAP: u16 = {gap};
"#,
        units_per_cell = config.units_per_cell,
        mouse_enabled = config.mouse_enabled,
        card_height = config.card_height,
        gap = config.gap,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    units_per_cell: u16,
    mouse_enabled: bool,
    card_height: u16,
    gap: u16,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            units_per_cell: 10,
            mouse_enabled: true,
            card_height: 12,
            gap: 1,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Any top-level key ends the previous section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_ui = trimmed == "ui:";
            continue;
        }

        if !in_ui {
            continue;
        }

        // ui: values are plain scalars, anything after '#' is a comment
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let value = value.split('#').next().unwrap_or("").trim();
        match key.trim() {
            "units_per_cell" => config.units_per_cell = value.parse().unwrap_or(10),
            "mouse_enabled" => config.mouse_enabled = value == "true",
            "card_height" => config.card_height = value.parse().unwrap_or(12),
            "gap" => config.gap = value.parse().unwrap_or(1),
            _ => {}
        }
    }

    config
}
