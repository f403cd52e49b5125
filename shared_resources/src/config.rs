use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

pub const CONFIG_PATH: &str = "config.json";
pub const FALLBACK_CONFIG_PATH: &str = "_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorConfig {
    pub num_floors: u8,
    pub num_elevators: usize,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            num_floors: 5,
            num_elevators: 2,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TimingConfig {
    pub tick_period_ms: u64,
    pub door_open_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            tick_period_ms: 500,
            door_open_ms: 1500,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub elevator: ElevatorConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl ConfigFile {
    /// Reads `path` when given. Otherwise tries `config.json`, then
    /// `_config.json`, then falls back to the built-in settings.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let candidates = [Path::new(CONFIG_PATH), Path::new(FALLBACK_CONFIG_PATH)];
                match candidates.iter().find(|candidate| candidate.exists()) {
                    Some(found) => Self::read(found)?,
                    None => {
                        info!("No configuration file provided, using default settings...");
                        ConfigFile::default()
                    }
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elevator.num_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "a building needs at least 2 floors, got {}",
                self.elevator.num_floors
            )));
        }
        if self.elevator.num_elevators == 0 {
            return Err(ConfigError::Invalid(String::from("a building needs at least 1 elevator")));
        }
        if self.timing.tick_period_ms == 0 {
            return Err(ConfigError::Invalid(String::from("tick period must be non-zero")));
        }
        Ok(())
    }
}
