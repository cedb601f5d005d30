use log::{ debug, info };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

use crate::config::KanbanConfig;

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "EASYKANBAN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid rule `{rule}`: {reason}")]
    InvalidRule { rule: String, reason: String },
}

impl KanbanConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and check configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: KanbanConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path wins, then `EASYKANBAN_CONFIG`, then the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from),
        };

        match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject rule sets that no input could ever satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.rules;

        if rules.username_max_len == 0 {
            return Err(ConfigError::InvalidRule {
                rule: "username_max_len".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if rules.username_separator.is_alphanumeric() {
            return Err(ConfigError::InvalidRule {
                rule: "username_separator".to_string(),
                reason: format!("'{}' is alphanumeric", rules.username_separator),
            });
        }

        if rules.password_specials.is_empty() {
            return Err(ConfigError::InvalidRule {
                rule: "password_specials".to_string(),
                reason: "at least one special character is required".to_string(),
            });
        }

        if let Some(c) = rules.password_specials.chars().find(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidRule {
                rule: "password_specials".to_string(),
                reason: format!("'{}' is not a special character", c),
            });
        }

        // uppercase + digit + special need three characters at minimum
        if rules.password_min_len < 3 {
            return Err(ConfigError::InvalidRule {
                rule: "password_min_len".to_string(),
                reason: "must be at least 3".to_string(),
            });
        }

        Ok(())
    }
}
