//! Stateless entry points tying configuration and cost model together

use crate::config::EngineConfig;
use crate::cost::{Cost, MovementCost, StandardCost};
use crate::error::{BattleError, Result};
use crate::hex::{to_axial, GridPosition};
use crate::path::{self, LegalMoves, PathResult};
use crate::target;
use crate::unit::{PlacementMap, Unit};
use crate::zone::{Battlefield, Zone};
use std::collections::BTreeSet;
use tracing::debug;

/// Rules engine
///
/// Holds no battlefield state; every query takes the current battlefield and
/// placement explicitly.
pub struct Engine {
    config: EngineConfig,
    cost_model: Box<dyn MovementCost>,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            cost_model: Box::new(StandardCost::from_config(&config)),
            config,
        }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cost_model: Box::new(StandardCost::from_config(&config)),
            config,
        })
    }

    /// Replace the standard movement rules entirely
    pub fn with_cost_model(mut self, model: impl MovementCost + 'static) -> Self {
        self.cost_model = Box::new(model);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn build_battlefield(&self, rows: i32, cols: i32, placement: &PlacementMap) -> Result<Battlefield> {
        Battlefield::build_with(rows, cols, placement, &self.config)
    }

    /// Price of a single adjacent step
    pub fn step_cost(&self, unit: &Unit, from: &Zone, to: &Zone, placement: &PlacementMap) -> Cost {
        self.cost_model.step_cost(unit, from, to, 1, placement)
    }

    /// Cheapest route for the unit standing at `from`
    ///
    /// Both positions must lie on `field`.
    pub fn find_path(
        &self,
        field: &Battlefield,
        placement: &PlacementMap,
        from: GridPosition,
        to: GridPosition,
    ) -> Result<PathResult> {
        let unit = unit_at(placement, from)?;
        let result = path::find_path(
            to_axial(from),
            to_axial(to),
            unit,
            placement,
            field,
            self.cost_model.as_ref(),
            self.config.search,
        );
        debug!(%from, %to, unit = %unit.id, cost = result.total_cost, "computed path");
        Ok(result)
    }

    /// Destinations for the unit standing at `from`
    pub fn legal_moves(
        &self,
        field: &Battlefield,
        placement: &PlacementMap,
        from: GridPosition,
    ) -> Result<LegalMoves> {
        let unit = unit_at(placement, from)?;
        let moves = path::legal_moves(
            unit,
            from,
            placement,
            field,
            self.cost_model.as_ref(),
            self.config.search,
        );
        debug!(%from, unit = %unit.id, count = moves.len(), "computed legal moves");
        Ok(moves)
    }

    /// Targets for the unit standing at `from`
    pub fn legal_targets(
        &self,
        field: &Battlefield,
        placement: &PlacementMap,
        from: GridPosition,
    ) -> Result<BTreeSet<GridPosition>> {
        let unit = unit_at(placement, from)?;
        let zone = field.zone(from).ok_or(BattleError::NoUnitAt(from))?;
        let targets = target::legal_targets(unit, zone, placement, field);
        debug!(%from, unit = %unit.id, count = targets.len(), "computed legal targets");
        Ok(targets)
    }
}

/// Look up the unit at `pos`, failing if the zone is empty
pub fn unit_at(placement: &PlacementMap, pos: GridPosition) -> Result<&Unit> {
    placement.get(&pos).ok_or(BattleError::NoUnitAt(pos))
}
