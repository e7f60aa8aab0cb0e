use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the settings file location; shell variables and `~` are expanded.
pub const CONFIG_PATH_ENV: &str = "SLIDE_READER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value in config file at {config_path}: {message}")]
    ConfigValueError {
        config_path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reader: ReaderSettings,
    pub headings: HeadingSettings,
}

/// Presentation settings for the terminal reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    pub words_per_minute: u32,
    /// Start with auto-advance switched on.
    pub auto_advance: bool,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            auto_advance: false,
        }
    }
}

/// Thresholds for headings written without `#` markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    pub max_length: usize,
    pub min_title_case_ratio: f64,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            max_length: 120,
            min_title_case_ratio: 0.4,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config
            .validate()
            .map_err(|message| ConfigError::ConfigValueError {
                config_path: config_path.to_path_buf(),
                message,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$SLIDE_READER_CONFIG` if set, else `~/.config/slide-reader/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_PATH_ENV) {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/slide-reader");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.reader.words_per_minute == 0 {
            return Err("reader.words_per_minute must be positive".to_string());
        }
        if self.headings.max_length == 0 {
            return Err("headings.max_length must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.headings.min_title_case_ratio) {
            return Err("headings.min_title_case_ratio must be between 0 and 1".to_string());
        }
        Ok(())
    }
}
