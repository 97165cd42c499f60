use std::path::Path;

use crate::game::Game;
use crate::grid::{GridError, Tile};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Session parameters, fixed for the lifetime of one game.
///
/// Every field is optional in TOML:
///
/// ```toml
/// size = 5
/// target = 4096
/// seed = 42
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct GameConfig {
    #[serde(default = "defaults::size")]
    pub size: usize,
    #[serde(default = "defaults::target")]
    pub target: Tile,
    /// Seed for the tile spawner. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: defaults::size(), target: defaults::target(), seed: None }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that a game can be built from these parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(GridError::InvalidSize.into());
        }
        if self.target < 2 || !self.target.is_power_of_two() {
            return Err(GridError::InvalidTarget(self.target).into());
        }
        Ok(())
    }

    /// An empty game with these parameters.
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        Ok(Game::new(self.size, self.target)?)
    }
}

mod defaults {
    use crate::grid::Tile;

    pub fn size() -> usize { 4 }
    pub fn target() -> Tile { 2048 }
}
