// Configuration module for reading Snake.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub selector: SelectorConfig,
    pub random: RandomConfig,
    pub debug: DebugConfig,
}

/// Move selection constants
#[derive(Debug, Deserialize, Clone)]
pub struct SelectorConfig {
    /// Returned when no direction is safe
    pub fallback_move: Direction,
}

/// Random fallback configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RandomConfig {
    /// Fixed seed for the fallback generator; unset means OS entropy
    pub seed: Option<u64>,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            selector: SelectorConfig {
                fallback_move: Direction::Down,
            },
            random: RandomConfig { seed: None },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }

    /// Same as `default_hardcoded` but with a fixed fallback seed
    pub fn seeded(seed: u64) -> Self {
        let mut config = Self::default_hardcoded();
        config.random.seed = Some(seed);
        config
    }
}
