use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::fallback::FallbackConfig;
use self::output::OutputConfig;
use self::tiers::{TierConfig, default_tiers};

pub mod dictionary;
pub mod fallback;
pub mod output;
pub mod tiers;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid tier configuration: {0}")]
    InvalidTiers(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub fallback: FallbackConfig,
    pub output: OutputConfig,
    /// Cumulative tiers, easiest first
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            fallback: FallbackConfig::default(),
            output: OutputConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl Config {
    /// Defaults overridden by `YOMI_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to [`Config::new`]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            let config = Self::new();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("YOMI_DICTIONARY_PATH") {
            self.dictionary.path = path;
        }

        if let Some(enabled) = lookup("YOMI_DICTIONARY_ENABLED").and_then(|v| v.parse().ok()) {
            self.dictionary.enabled = enabled;
        }

        if let Some(table) = lookup("YOMI_TRANSLITERATION_TABLE") {
            self.fallback.table_path = Some(table);
        }

        if let Some(dictionary) = lookup("YOMI_TOKENIZER_DICTIONARY") {
            self.fallback.tokenizer_dictionary = Some(dictionary);
        }

        if let Some(layout) = lookup("YOMI_TOKENIZER_LAYOUT").and_then(|v| v.parse().ok()) {
            self.fallback.tokenizer_layout = layout;
        }

        if let Some(on_not_found) =
            lookup("YOMI_FALLBACK_ON_NOT_FOUND").and_then(|v| v.parse().ok())
        {
            self.fallback.on_not_found = on_not_found;
        }

        if let Some(dir) = lookup("YOMI_OUTPUT_DIR") {
            self.output.dir = dir;
        }
    }

    /// Tier names must be unique and non-empty, counts non-decreasing
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut previous = 0;

        for tier in &self.tiers {
            if tier.name.trim().is_empty() {
                return Err(ConfigError::InvalidTiers("empty tier name".to_string()));
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(ConfigError::InvalidTiers(format!(
                    "duplicate tier {}",
                    tier.name
                )));
            }
            if tier.count < previous {
                return Err(ConfigError::InvalidTiers(format!(
                    "tier {} ({}) is smaller than the tier before it ({})",
                    tier.name, tier.count, previous
                )));
            }
            previous = tier.count;
        }

        Ok(())
    }
}
