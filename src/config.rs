//! Configuration loading for llmstr.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.llm-strings/config.toml` (user)
//! 3. built-in defaults
//!
//! ```toml
//! [normalize]
//! verbose = true
//!
//! [validate]
//! strict = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{LlmStringsError, NormalizeOptions, Result, ValidateOptions};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeOptions,
    #[serde(default)]
    pub validate: ValidateOptions,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist; a missing user file falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LlmStringsError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            LlmStringsError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(LlmStringsError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(dirs::home_dir()
            .map(|home| home.join(".llm-strings").join("config.toml"))
            .filter(|p| p.exists()))
    }
}
