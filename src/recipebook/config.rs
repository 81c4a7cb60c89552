use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the recipe book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBookConfig {
    /// Pretty-print the persisted recipe collections
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Ask before permanently removing recipes from the trash
    #[serde(default = "default_true")]
    pub confirm_purge: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RecipeBookConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            confirm_purge: true,
        }
    }
}

impl RecipeBookConfig {
    pub const KEYS: [&'static str; 2] = ["pretty-json", "confirm-purge"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeBookConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "pretty-json" => Some(self.pretty_json.to_string()),
            "confirm-purge" => Some(self.confirm_purge.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = parse_bool(value)
            .ok_or_else(|| RecipeError::Config(format!("Invalid value for {}: {}", key, value)))?;
        match key {
            "pretty-json" => self.pretty_json = flag,
            "confirm-purge" => self.confirm_purge = flag,
            _ => return Err(RecipeError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// All keys with their current values, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
