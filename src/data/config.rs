//! Game configuration
//!
//! Maze size, RNG seed and an optional narrative file, read from RON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MAZEDELVE_CONFIG";
/// Config file picked up when present and no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";
/// Largest maze side accepted
pub const MAX_GRID_SIDE: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("RON error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("maze size {width}x{height} is outside 1..={max}", max = MAX_GRID_SIDE)]
    InvalidSize { width: usize, height: usize },
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for a reproducible run; entropy when absent
    pub seed: Option<u64>,
    /// RON narrative file replacing the built-in rooms
    pub narrative: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            seed: None,
            narrative: None,
        }
    }
}

impl GameConfig {
    /// Load from `$MAZEDELVE_CONFIG`, else `assets/config.ron`, else defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::from_file(path)
        } else {
            log::info!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = 1..=MAX_GRID_SIDE;
        if side.contains(&self.width) && side.contains(&self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}
