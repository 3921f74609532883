use serde::Deserialize;
use std::collections::HashMap;

use crate::alphabet::Alphabet;

#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetConfig {
    pub chars: String,
    #[serde(default = "default_padding")]
    pub padding: String,
}

fn default_padding() -> String {
    "=".to_string()
}

impl AlphabetConfig {
    /// Builds a validated [`Alphabet`] from this configuration entry.
    pub fn to_alphabet(&self) -> Result<Alphabet, String> {
        let mut padding_chars = self.padding.chars();
        let padding = padding_chars
            .next()
            .ok_or_else(|| "Padding must be a single character".to_string())?;
        if padding_chars.next().is_some() {
            return Err(format!(
                "Padding must be a single character, got '{}'",
                self.padding
            ));
        }
        Alphabet::from_str(&self.chars, padding)
    }
}

#[derive(Debug, Deserialize)]
pub struct AlphabetsConfig {
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/utf64/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("utf64").join("alphabets.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("alphabets.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetsConfig) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Builds the named alphabet, validating its definition.
    pub fn build(&self, name: &str) -> Result<Alphabet, String> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            format!(
                "Alphabet '{}' not found. Use --list to see available alphabets.",
                name
            )
        })?;
        config.to_alphabet()
    }
}
