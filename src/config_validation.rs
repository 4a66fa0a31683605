// Configuration validation module

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{load_config, ConfigError, DeckConfig};

/// Check the deck for problems serde cannot catch
pub fn validate_config(config: &DeckConfig) -> Result<(), ConfigError> {
    if config.cards.is_empty() {
        return Err(ConfigError::EmptyDeck);
    }

    let mut seen = HashSet::new();
    for (index, card) in config.cards.iter().enumerate() {
        if card.title.trim().is_empty() {
            return Err(ConfigError::BlankTitle { index });
        }
        if !seen.insert(card.id.as_str()) {
            return Err(ConfigError::DuplicateId { id: card.id.clone() });
        }
    }

    Ok(())
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<DeckConfig, ConfigError> {
    let config = load_config(config_path).inspect_err(|e| {
        warn!("Failed to load configuration: {}", e);
    })?;

    validate_config(&config).inspect_err(|e| {
        warn!("Invalid configuration: {}", e);
    })?;

    info!(cards = config.cards.len(), "deck loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::path::Path;

    fn deck(cards: &str) -> DeckConfig {
        let yaml = format!(
            "application:\n  title: t\n  status_bar:\n    default_text: s\ncards: {}\n",
            cards
        );
        parse_config(&yaml, Path::new("deck.yaml")).unwrap()
    }

    #[test]
    fn test_valid_deck() {
        let config = deck(r#"[{id: a, title: A}, {id: b, title: B}]"#);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_deck() {
        let config = deck("[]");
        assert!(matches!(validate_config(&config), Err(ConfigError::EmptyDeck)));
    }

    #[test]
    fn test_rejects_blank_title() {
        let config = deck(r#"[{id: a, title: A}, {id: b, title: "  "}]"#);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::BlankTitle { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let config = deck(r#"[{id: a, title: A}, {id: a, title: B}]"#);
        match validate_config(&config) {
            Err(ConfigError::DuplicateId { id }) => assert_eq!(id, "a"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
