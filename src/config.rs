//! Configuration for burger-split.
//!
//! Every field has a built-in default, so an empty (or absent) config file
//! produces the stock Squarespace output. A TOML file may override any subset.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SplitError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub template: TemplateConfig,
}

/// Where to read the combined stylesheet and where to write the split files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Combined stylesheet (default: `src/hamburgers.css`)
    pub input: PathBuf,
    /// Directory receiving one `<identifier>.css` per animation (default: `src`)
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src").join("hamburgers.css"),
            output_dir: PathBuf::from("src"),
        }
    }
}

/// Literal values substituted into the generated blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Class of the host site's burger button.
    pub host_selector: String,
    /// Library base class replaced by `host_selector` inside each block.
    pub source_selector: String,
    /// Bar thickness.
    pub layer_height: String,
    /// Bar color, usually a theme variable with a fallback.
    pub color: String,
    /// Transition duration.
    pub speed: String,
    /// Class the host toggles while the menu is open.
    pub active_class: String,
    /// Opacity applied on hover/active.
    pub state_opacity: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            host_selector: ".header-burger-btn".to_string(),
            source_selector: ".hamburger".to_string(),
            layer_height: "2px".to_string(),
            color: "var(--navigationLinkColor, #000)".to_string(),
            speed: "0.35s".to_string(),
            active_class: "burger--active".to_string(),
            state_opacity: "0.7".to_string(),
        }
    }
}

impl Config {
    /// Load a config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, SplitError> {
        let content = fs::read_to_string(path).map_err(|e| SplitError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| SplitError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }
}
