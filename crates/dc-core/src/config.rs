//! Game configuration
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ROOM_MAX_SIZE};

/// Inclusive count range used for rooms and enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Uniform count in min..=max
    pub fn roll(&self, rng: &mut crate::GameRng) -> u32 {
        self.min + rng.rn2(self.max.saturating_sub(self.min) + 1)
    }
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in tiles
    pub width: i32,
    /// Grid height in tiles
    pub height: i32,
    /// Room placement attempts per level
    pub room_count: CountRange,
    /// Enemies spawned per level
    pub enemy_count: CountRange,
    /// Percent chance per room of a potion, weapon or armor lying around
    pub loot_chance: u32,
    /// Fixed seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: CountRange::new(4, 8),
            enemy_count: CountRange::new(3, 6),
            loot_chance: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Smallest grid side the room generator can place into
    pub const MIN_GRID_SIDE: i32 = ROOM_MAX_SIZE + 3;

    /// Load options from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Parse and validate options from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants level generation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < Self::MIN_GRID_SIDE || self.height < Self::MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: Self::MIN_GRID_SIDE,
            });
        }

        for (name, range) in [("room_count", self.room_count), ("enemy_count", self.enemy_count)] {
            if range.min > range.max {
                return Err(ConfigError::InvalidRange {
                    name,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if self.loot_chance > 100 {
            return Err(ConfigError::InvalidRange {
                name: "loot_chance",
                min: 0,
                max: self.loot_chance,
            });
        }

        Ok(())
    }
}
