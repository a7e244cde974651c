//! Configuration file support

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use twosquare::DecryptOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key used for the upper square
    pub first_key: Option<String>,

    /// Key used for the lower square
    pub second_key: Option<String>,

    /// Write the merged letter as I when decrypting
    pub unmerge_ij: bool,

    /// Drop a trailing Z when decrypting
    pub strip_trailing_pad: bool,

    /// Default output format
    pub default_output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let options = DecryptOptions::default();
        Self {
            first_key: None,
            second_key: None,
            unmerge_ij: options.unmerge_ij,
            strip_trailing_pad: options.strip_trailing_pad,
            default_output: None,
        }
    }
}

impl Config {
    /// Decrypt options as configured, before command-line overrides
    pub fn decrypt_options(&self) -> DecryptOptions {
        DecryptOptions {
            unmerge_ij: self.unmerge_ij,
            strip_trailing_pad: self.strip_trailing_pad,
        }
    }
}

/// Where `set-key` writes when no `--config` is given
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("twosquare").join("config.toml"))
}

/// Load configuration from file or defaults
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        p.clone()
    } else {
        // Try default locations
        if let Some(home) = dirs::home_dir() {
            let dot_config = home.join(".twosquare").join("config.toml");
            if dot_config.exists() {
                dot_config
            } else {
                let config_dir = home.join(".config").join("twosquare").join("config.toml");
                if config_dir.exists() {
                    config_dir
                } else {
                    // Return default config if no file found
                    return Ok(Config::default());
                }
            }
        } else {
            return Ok(Config::default());
        }
    };

    if config_path.exists() {
        log::debug!("Loading config from {}", config_path.display());
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;
    log::debug!("Saved config to {}", path.display());
    Ok(())
}
