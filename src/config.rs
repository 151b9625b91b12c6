use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Parameters for generating levels.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelConfig {
    pub width: i32,
    pub height: i32,
    /// Depth of the partition tree; up to `2^depth` rooms.
    pub depth: u32,
    /// How many times generation is attempted before giving up on a level
    /// with no floor (or, for a session, no exit).
    pub max_attempts: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 25,
            depth: 3,
            max_attempts: 5,
        }
    }
}

impl LevelConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}
