//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";
const APP_NAME: &str = "conquest-mapper";

/// Top-level mapper configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Canvas geometry and data folder layout.
    pub map: MapConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// Canvas and data-folder settings for map rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Side length of the square canvas in pixels.
    pub canvas_length: u32,
    /// Scale of the map: pixels per astronomical unit.
    pub pixels_per_au: u32,
    /// Folder holding the canvas template and receiving rendered maps.
    pub data_dir: PathBuf,
    /// File name of the canvas template inside `data_dir`.
    pub template: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,conquest_map=trace").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub file_logging: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            canvas_length: 1024,
            pixels_per_au: 128,
            data_dir: PathBuf::from("data"),
            template: "canvas.png".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: false,
        }
    }
}

impl MapConfig {
    /// Full path of the canvas template.
    pub fn template_path(&self) -> PathBuf {
        self.data_dir.join(&self.template)
    }
}

/// Platform configuration directory for the mapper (`<config>/conquest-mapper`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or write a default one there.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
