//! Error taxonomy for battlefield queries

use crate::hex::GridPosition;
use crate::unit::UnitId;

/// Errors surfaced to callers
///
/// "No path" and "impassable step" are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("invalid battlefield dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("no such unit at position {0}")]
    NoUnitAt(GridPosition),

    #[error("unit {id} placed outside the battlefield at {position}")]
    UnitOutOfBounds { id: UnitId, position: GridPosition },

    #[error("more than one unit placed at {0}")]
    DuplicatePosition(GridPosition),

    #[error("no unit selected")]
    NoSelection,

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: GridPosition, to: GridPosition },

    #[error("illegal target from {from} to {to}")]
    IllegalTarget { from: GridPosition, to: GridPosition },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BattleError>;
