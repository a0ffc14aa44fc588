//! Board snapshot types and static map data.
//!
//! Contains the powers and their palette, unit entries, the standard
//! territory table with token coordinates, and the snapshot format read from
//! the game-state side.

pub mod coords;
pub mod power;
pub mod state;
pub mod territory;
pub mod unit;

pub use coords::{CoordinateTable, Point};
pub use power::{Power, ALL_POWERS};
pub use state::{default_colors, BoardConfig, ConfigError, GameHistory, TurnSnapshot};
pub use territory::{
    find_territory, territory_id, TerritoryInfo, COAST_POSITIONS, STANDARD_TERRITORIES,
    SUPPLY_CENTER_COUNT, TERRITORY_COUNT,
};
pub use unit::{UnitEntry, UnitType};
