//! Pixel positions for unit tokens.
//!
//! The standard table is baked into the crate. Alternative tables load from a
//! JSON object of `name: [x, y]`, where each component may be written as a
//! number or as a numeric string.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::state::ConfigError;
use super::territory::{COAST_POSITIONS, STANDARD_TERRITORIES};

/// A position on the map in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A coordinate component as written in JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Component {
    Number(f64),
    Text(String),
}

impl Component {
    fn value(self, name: &str) -> Result<f64, ConfigError> {
        match self {
            Component::Number(v) => Ok(v),
            Component::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCoordinate { name: name.to_string(), value: s }),
        }
    }
}

/// Territory name to token position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateTable {
    positions: HashMap<String, Point>,
}

impl CoordinateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        CoordinateTable::default()
    }

    /// Returns the table for the standard map, coasts included.
    pub fn standard() -> Self {
        let mut table = CoordinateTable::new();
        for t in STANDARD_TERRITORIES.iter() {
            table.insert(t.name, t.position);
        }
        for (name, pos) in COAST_POSITIONS.iter() {
            table.insert(name, *pos);
        }
        table
    }

    /// Parses a table from a JSON object of `name: [x, y]`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, (Component, Component)> = serde_json::from_str(json)?;
        let mut table = CoordinateTable::new();
        for (name, (x, y)) in raw {
            let point = Point::new(x.value(&name)?, y.value(&name)?);
            table.positions.insert(name, point);
        }
        Ok(table)
    }

    /// Loads a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json(&data)
    }

    pub fn insert(&mut self, name: &str, point: Point) {
        self.positions.insert(name.to_string(), point);
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
