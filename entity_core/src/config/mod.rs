//! Configuration loading from TOML and JSON files

mod roster;
mod rules;

pub use roster::{default_roster, EntityTemplate, ItemTemplate, Roster, RosterConfig};
pub use rules::CombatRules;

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load a roster file, picking the format from the extension (`.json`, else TOML)
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let config: RosterConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path)?,
        _ => load_toml(path)?,
    };
    config.build()
}

/// Parse and build a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let config: RosterConfig = parse_toml(content)?;
    config.build()
}
