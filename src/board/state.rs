//! Board snapshots handed to the renderer.
//!
//! A [`BoardConfig`] holds the ownership, palette and unit placement for one
//! render pass. It is produced by the game-state side, which emits it as JSON:
//!
//! ```json
//! {"owns": [["paris", "France"]],
//!  "colors": {"France": "#126dc0"},
//!  "units": [["Paris", "A", "France"]]}
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::power::ALL_POWERS;
use super::territory::STANDARD_TERRITORIES;
use super::unit::UnitEntry;

/// Errors raised while loading snapshots, coordinate tables or options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid coordinate for '{name}': '{value}'")]
    InvalidCoordinate { name: String, value: String },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io { path: path.to_path_buf(), source }
    }
}

/// Ownership, palette and units for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// `(territory, faction)` pairs, applied in order.
    #[serde(default)]
    pub owns: Vec<(String, String)>,
    /// Faction key to CSS color.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub units: Vec<UnitEntry>,
}

impl BoardConfig {
    /// Returns the board before the first turn: every home territory owned by
    /// its power, no units, and the default palette.
    pub fn initial() -> Self {
        let owns = STANDARD_TERRITORIES
            .iter()
            .filter_map(|t| t.home_power.map(|p| (t.element_id(), p.name().to_string())))
            .collect();
        BoardConfig { owns, colors: default_colors(), units: Vec::new() }
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json(&data)
    }

    /// Returns the color for a faction, if the palette has one.
    pub fn color_of(&self, faction: &str) -> Option<&str> {
        self.colors.get(faction).map(String::as_str)
    }
}

/// The default palette keyed by faction name.
pub fn default_colors() -> HashMap<String, String> {
    ALL_POWERS
        .iter()
        .map(|p| (p.name().to_string(), p.color().to_string()))
        .collect()
}

/// One named snapshot in a game history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub name: String,
    pub board: BoardConfig,
}

/// An ordered series of snapshots, one per turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameHistory {
    pub turns: Vec<TurnSnapshot>,
}

impl GameHistory {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json(&data)
    }
}
