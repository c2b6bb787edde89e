//! Battlefield zones built from grid dimensions and the placement map

use crate::config::EngineConfig;
use crate::error::{BattleError, Result};
use crate::hex::{to_axial, Axial, GridPosition, LaneId};
use crate::unit::{PlacementMap, UnitId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which side's territory a zone belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    Player,
    Enemy,
    Neutral,
}

/// How deep into its territory a zone lies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    Frontline,
    Backline,
    Middle,
}

/// One cell of the battlefield
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub position: GridPosition,
    pub axial: Axial,
    pub occupant: Option<UnitId>,
    pub allegiance: Allegiance,
    pub depth: Depth,
    pub lane: LaneId,
}

impl Zone {
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Snapshot of every zone for one placement
///
/// Rebuilt, never patched, whenever the placement or dimensions change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    rows: i32,
    cols: i32,
    /// Row-major
    zones: Vec<Zone>,
}

impl Battlefield {
    /// Build with the standard three-row bands
    pub fn build(rows: i32, cols: i32, placement: &PlacementMap) -> Result<Self> {
        Self::build_with(rows, cols, placement, &EngineConfig::default())
    }

    pub fn build_with(
        rows: i32,
        cols: i32,
        placement: &PlacementMap,
        config: &EngineConfig,
    ) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(BattleError::InvalidDimensions { rows, cols });
        }

        for (&position, unit) in placement {
            if !in_bounds(rows, cols, position) {
                return Err(BattleError::UnitOutOfBounds { id: unit.id, position });
            }
        }

        let band = band_depth(rows, config.band_rows);
        let (front_lo, front_hi) = frontline_rows(rows);

        let mut zones = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            let allegiance = classify_allegiance(row, rows, band);
            let depth = if row == front_lo || row == front_hi {
                Depth::Frontline
            } else if allegiance == Allegiance::Neutral {
                Depth::Middle
            } else {
                Depth::Backline
            };

            for col in 0..cols {
                let position = GridPosition::new(row, col);
                let axial = to_axial(position);
                zones.push(Zone {
                    position,
                    axial,
                    occupant: placement.get(&position).map(|unit| unit.id),
                    allegiance,
                    depth,
                    lane: axial.lane(),
                });
            }
        }

        debug!(rows, cols, units = placement.len(), "built battlefield");

        Ok(Self { rows, cols, zones })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// All zones in row-major order
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, pos: GridPosition) -> Option<&Zone> {
        if !in_bounds(self.rows, self.cols, pos) {
            return None;
        }
        self.zones.get((pos.row * self.cols + pos.col) as usize)
    }

    pub fn zone_at(&self, axial: Axial) -> Option<&Zone> {
        self.zone(axial.to_grid())
    }

    pub fn contains(&self, axial: Axial) -> bool {
        in_bounds(self.rows, self.cols, axial.to_grid())
    }

    /// Neighbors that exist on this battlefield, in E, SE, SW, W, NW, NE order
    pub fn neighbors_in_bounds(&self, axial: Axial) -> impl Iterator<Item = &Zone> + '_ {
        axial
            .neighbors()
            .into_iter()
            .filter_map(move |n| self.zone_at(n))
    }

    pub fn empty_zones(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter().filter(|z| z.is_empty())
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

fn in_bounds(rows: i32, cols: i32, pos: GridPosition) -> bool {
    (0..rows).contains(&pos.row) && (0..cols).contains(&pos.col)
}

/// Band depth shrinks on short grids so the two bands never overlap
fn band_depth(rows: i32, band_rows: u32) -> i32 {
    (band_rows.min(i32::MAX as u32) as i32).min(rows / 2)
}

/// Enemy holds the top band, player the bottom band
fn classify_allegiance(row: i32, rows: i32, band: i32) -> Allegiance {
    if row < band {
        Allegiance::Enemy
    } else if row >= rows - band {
        Allegiance::Player
    } else {
        Allegiance::Neutral
    }
}

/// The two central rows, clamped into `[0, rows)`
fn frontline_rows(rows: i32) -> (i32, i32) {
    let last = rows - 1;
    let lo = (rows / 2 - 1).clamp(0, last);
    let hi = (rows / 2).clamp(0, last);
    (lo, hi)
}
