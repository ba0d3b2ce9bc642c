use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::WiringError;
use crate::strip::StripSettings;
use crate::wiring::{MinuteLeds, WiringLayout};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stencil: StencilConfig,
    pub languages: LanguagesConfig,
    pub display: DisplayConfig,
    pub strip: StripSettings,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            // Create default config
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".config/wordclock/config.toml"))
    }

    /// Stencil rows of the selected language
    pub fn stencil_rows(&self) -> Result<&[String], WiringError> {
        self.languages
            .0
            .get(&self.stencil.language)
            .map(Vec::as_slice)
            .ok_or_else(|| WiringError::UnknownLanguage(self.stencil.language.clone()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StencilConfig {
    /// Language whose stencil is mounted on the face
    pub language: String,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            language: "french".to_string(),
        }
    }
}

/// Stencil rows keyed by language name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguagesConfig(pub BTreeMap<String, Vec<String>>);

impl Default for LanguagesConfig {
    fn default() -> Self {
        let french = [
            "ILNESTODEUX",
            "QUATRETROIS",
            "NEUFUNESEPT",
            "HUITSIXCINQ",
            "MIDIXMINUIT",
            "ONZERHEURES",
            "MOINSOLEDIX",
            "ETRQUARTPMD",
            "VINGT-CINQU",
            "ETSDEMIEPAM",
        ];

        let mut languages = BTreeMap::new();
        languages.insert(
            "french".to_string(),
            french.iter().map(|row| row.to_string()).collect(),
        );
        Self(languages)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Physical wiring variant
    pub wiring_layout: WiringLayout,
    /// Strip indices of the minute LEDs; defaults to the four LEDs after the grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_leds: Option<MinuteLeds>,
}
