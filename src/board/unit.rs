//! Unit types and the unit entries of a board snapshot.
//!
//! A snapshot names units by `(location, type tag, faction)`. The type tag is
//! resolved to the closed [`UnitType`] enumeration when a token is drawn.

use serde::{Deserialize, Serialize};

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the uppercase tag used in board snapshots and token ids.
    pub const fn tag(self) -> char {
        match self {
            UnitType::Army => 'A',
            UnitType::Fleet => 'F',
        }
    }

    /// Parses a unit type from its exact tag.
    pub fn from_tag(tag: &str) -> Option<UnitType> {
        match tag {
            "A" => Some(UnitType::Army),
            "F" => Some(UnitType::Fleet),
            _ => None,
        }
    }

    /// Resolves a tag for drawing. Anything that is not an army is a fleet;
    /// the flag is false when the tag was not a recognized one.
    pub fn resolve_tag(tag: &str) -> (UnitType, bool) {
        match UnitType::from_tag(tag) {
            Some(t) => (t, true),
            None => (UnitType::Fleet, false),
        }
    }
}

/// A unit entry in a board snapshot: `[location, type, faction]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct UnitEntry {
    pub location: String,
    pub unit_type: String,
    pub faction: String,
}

impl UnitEntry {
    pub fn new(location: &str, unit_type: &str, faction: &str) -> Self {
        UnitEntry {
            location: location.to_string(),
            unit_type: unit_type.to_string(),
            faction: faction.to_string(),
        }
    }
}

impl From<(String, String, String)> for UnitEntry {
    fn from((location, unit_type, faction): (String, String, String)) -> Self {
        UnitEntry { location, unit_type, faction }
    }
}

impl From<UnitEntry> for (String, String, String) {
    fn from(u: UnitEntry) -> Self {
        (u.location, u.unit_type, u.faction)
    }
}
