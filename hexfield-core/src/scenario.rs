//! Scenario - battlefield dimensions plus initial deployment

use crate::error::{BattleError, Result};
use crate::hex::GridPosition;
use crate::unit::{PlacementMap, Unit, UnitKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A unit and where it stands
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedUnit {
    pub position: GridPosition,
    pub unit: Unit,
}

/// Battlefield setup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub rows: i32,
    pub cols: i32,
    pub units: Vec<PlacedUnit>,
}

/// Player ids used by generated scenarios
pub const HOME: u8 = 0;
pub const AWAY: u8 = 1;

impl Scenario {
    /// Placement map for this deployment
    pub fn placement(&self) -> Result<PlacementMap> {
        let mut placement = PlacementMap::default();
        for placed in &self.units {
            if placement.insert(placed.position, placed.unit.clone()).is_some() {
                return Err(BattleError::DuplicatePosition(placed.position));
            }
        }
        Ok(placement)
    }

    /// Rewrite the unit list from a placement map, row-major
    pub fn set_placement(&mut self, placement: &PlacementMap) {
        let mut units: Vec<PlacedUnit> = placement
            .iter()
            .map(|(&position, unit)| PlacedUnit {
                position,
                unit: unit.clone(),
            })
            .collect();
        units.sort_by_key(|p| p.position);
        self.units = units;
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&content)?;
        scenario.placement()?;
        Ok(scenario)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Random mirrored deployment, `per_side` units for each player
    ///
    /// Home deploys in the bottom rows, away in the top rows; the away army
    /// is the home army reflected across the middle of the grid.
    pub fn random<R: Rng>(rng: &mut R, name: &str, rows: i32, cols: i32, per_side: usize) -> Self {
        let depth = (rows / 2).clamp(0, 3);
        let mut slots: Vec<GridPosition> = (rows - depth..rows)
            .flat_map(|row| (0..cols).map(move |col| GridPosition::new(row, col)))
            .collect();

        let mut units = Vec::new();
        let mut next_id = 1u32;
        for _ in 0..per_side.min(slots.len()) {
            let position = slots.swap_remove(rng.gen_range(0..slots.len()));
            let unit = Self::random_unit(rng, next_id, HOME);

            let mirrored = GridPosition::new(rows - 1 - position.row, cols - 1 - position.col);
            let mut twin = unit.clone();
            twin.id.0 = next_id + 1;
            twin.owner.0 = AWAY;

            units.push(PlacedUnit { position, unit });
            units.push(PlacedUnit {
                position: mirrored,
                unit: twin,
            });
            next_id += 2;
        }
        units.sort_by_key(|p| p.position);

        Self {
            name: name.to_string(),
            rows,
            cols,
            units,
        }
    }

    fn random_unit<R: Rng>(rng: &mut R, id: u32, owner: u8) -> Unit {
        let mut unit = match rng.gen_range(0..3) {
            0 => Unit::ranged(id, owner, rng.gen_range(1..=2)),
            1 => Unit::new(id, owner, rng.gen_range(2..=4)).with_disengage(),
            _ => Unit::new(id, owner, rng.gen_range(2..=3)),
        };
        if unit.kind == UnitKind::Melee && rng.gen_bool(0.25) {
            unit.zoc_cost_modifier = Some(rng.gen_range(1..=3));
        }
        unit
    }
}

impl Default for Scenario {
    /// 6x5 skirmish: three home units facing three away units
    fn default() -> Self {
        let placed = |row, col, unit| PlacedUnit {
            position: GridPosition::new(row, col),
            unit,
        };
        Self {
            name: "skirmish".to_string(),
            rows: 6,
            cols: 5,
            units: vec![
                placed(0, 2, Unit::ranged(4, AWAY, 2)),
                placed(1, 1, Unit::new(5, AWAY, 3)),
                placed(1, 3, Unit::new(6, AWAY, 3).with_disengage()),
                placed(4, 1, Unit::new(1, HOME, 3)),
                placed(4, 3, Unit::new(2, HOME, 3).with_zoc_cost(1)),
                placed(5, 2, Unit::ranged(3, HOME, 2).with_range(2, 3)),
            ],
        }
    }
}
