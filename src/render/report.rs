//! Per-entry problems found during a render pass.
//!
//! None of these stop a pass. Each affected entry is skipped (or drawn with
//! the template's own styling) and the rest of the board is still painted.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// No element carries the territory's id.
    MissingElement { territory: String, id: String },
    /// The palette has no entry for a faction.
    MissingColor { faction: String },
    /// The coordinate table has no position for a unit's location.
    MissingCoordinate { location: String },
    /// A unit type tag other than `A` or `F`; drawn as a fleet.
    UnknownUnitType { tag: String, location: String },
    /// The token layer or a unit template is absent from the document.
    MissingTemplate { id: String },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::MissingElement { territory, id } => {
                write!(f, "no element with id '{}' for territory '{}'", id, territory)
            }
            RenderWarning::MissingColor { faction } => {
                write!(f, "no color for faction '{}'", faction)
            }
            RenderWarning::MissingCoordinate { location } => {
                write!(f, "no coordinates for '{}'", location)
            }
            RenderWarning::UnknownUnitType { tag, location } => {
                write!(f, "unknown unit type '{}' at '{}', drawing a fleet", tag, location)
            }
            RenderWarning::MissingTemplate { id } => write!(f, "no element with id '{}'", id),
        }
    }
}

/// Summary of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub colored: usize,
    pub placed: usize,
    pub cleared: usize,
    pub warnings: Vec<RenderWarning>,
}

impl RenderReport {
    /// Records a warning and logs it.
    pub(crate) fn warn(&mut self, warning: RenderWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Folds another pass's counts and warnings into this one.
    pub fn merge(&mut self, other: RenderReport) {
        self.colored += other.colored;
        self.placed += other.placed;
        self.cleared += other.cleared;
        self.warnings.extend(other.warnings);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
