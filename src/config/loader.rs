use super::types::*;
use crate::utils::logging::is_known_level;
use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "quality-selector";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub selector: SelectorOptions,
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `config_path`, then the user config directory, then defaults.
    pub fn load_with_fallback<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Self::load(config_path);
        }

        if let Some(user_path) = Self::user_config_path().filter(|p| p.exists()) {
            debug!("Using config from {}", user_path.display());
            return Self::load(user_path);
        }

        debug!(
            "No config found at {}, using defaults",
            config_path.display()
        );
        Ok(Self::default())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if !is_known_level(&self.logging.level) {
            return Err(Error::validation(format!(
                "Invalid log level: {} (must be one of trace, debug, info, warn, error)",
                self.logging.level
            )));
        }

        let selector = &self.selector;

        if selector.auto_label.trim().is_empty() {
            return Err(Error::validation("auto_label must not be empty"));
        }

        if selector.min_height != 0
            && selector.max_height != 0
            && selector.min_height > selector.max_height
        {
            return Err(Error::validation(format!(
                "min_height ({}) must not exceed max_height ({})",
                selector.min_height, selector.max_height
            )));
        }

        Ok(())
    }
}
