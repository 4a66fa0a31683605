// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Card;

/// Errors raised while loading or validating a deck file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("deck has no cards")]
    EmptyDeck,

    #[error("card {index} has a blank title")]
    BlankTitle { index: usize },

    #[error("card id '{id}' is used more than once")]
    DuplicateId { id: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    pub application: ApplicationConfig,
    pub cards: Vec<CardConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConfigYaml {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl DeckConfig {
    /// Build collapsed cards in deck order
    pub fn build_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .map(|c| Card::new(c.id.clone(), c.title.clone(), c.body.clone()))
            .collect()
    }
}

/// Path of the deck file shipped with the crate
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str, path: &Path) -> Result<DeckConfig, ConfigError> {
    serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<DeckConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DECK: &str = r#"
application:
  title: "Deck"
  status_bar:
    default_text: "ready"
cards:
  - id: "a"
    title: "A"
    body: "alpha"
  - id: "b"
    title: "B"
"#;

    #[test]
    fn test_parse_deck() {
        let config = parse_config(DECK, Path::new("deck.yaml")).unwrap();

        assert_eq!(config.application.title, "Deck");
        assert!(config.application.bindings.is_empty());
        assert_eq!(config.cards.len(), 2);
        assert_eq!(config.cards[1].body, "");
    }

    #[test]
    fn test_build_cards_start_collapsed() {
        let config = parse_config(DECK, Path::new("deck.yaml")).unwrap();
        let cards = config.build_cards();

        assert_eq!(cards[0].id, "a");
        assert!(cards.iter().all(|c| !c.is_active()));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = parse_config("cards: [", Path::new("broken.yaml")).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DECK.as_bytes()).unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.cards.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.yaml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = load_config(None).unwrap();
        assert!(!config.cards.is_empty());
    }
}
