//! Project config (tailords.yaml) parsing.
//!
//! The config holds the seed options for both generators. Every field is
//! optional; missing values fall back to the generator defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::generate::{ColorPaletteOptions, TypographyScaleOptions};

/// Default config filename.
pub const CONFIG_FILENAME: &str = "tailords.yaml";

/// Project config loaded from tailords.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colour palette seed.
    pub palette: ColorPaletteOptions,

    /// Typography scale seed.
    pub typography: TypographyScaleOptions,
}

impl Config {
    /// Load config from a tailords.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| TokenError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TokenError::Parse {
            message: format!("Failed to serialise config: {}", e),
            help: None,
        })
    }
}
