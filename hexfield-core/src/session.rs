//! Caller-owned selection state and the actions it emits

use crate::cost::is_engaged;
use crate::engine::{unit_at, Engine};
use crate::error::{BattleError, Result};
use crate::hex::{to_axial, GridPosition};
use crate::path::LegalMoves;
use crate::unit::PlacementMap;
use crate::zone::Battlefield;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Requests handed back to the owner of the placement map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveRequested { from: GridPosition, to: GridPosition, cost: u32 },
    AttackRequested { from: GridPosition, to: GridPosition },
}

/// Current selection and the sets computed for it
///
/// Both sets are recomputed from scratch on every selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    selected: Option<GridPosition>,
    moves: LegalMoves,
    targets: BTreeSet<GridPosition>,
    engaged: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the unit at `pos`
    pub fn select(
        &mut self,
        engine: &Engine,
        field: &Battlefield,
        placement: &PlacementMap,
        pos: GridPosition,
    ) -> Result<()> {
        let unit = unit_at(placement, pos)?;
        let moves = engine.legal_moves(field, placement, pos)?;
        let targets = engine.legal_targets(field, placement, pos)?;

        self.engaged = is_engaged(to_axial(pos), unit.owner, placement);
        self.selected = Some(pos);
        self.moves = moves;
        self.targets = targets;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn selected(&self) -> Option<GridPosition> {
        self.selected
    }

    pub fn legal_moves(&self) -> &LegalMoves {
        &self.moves
    }

    pub fn legal_targets(&self) -> &BTreeSet<GridPosition> {
        &self.targets
    }

    /// Whether the selected unit stands next to an enemy
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn request_move(&self, to: GridPosition) -> Result<Action> {
        let from = self.selected.ok_or(BattleError::NoSelection)?;
        let cost = self
            .moves
            .cost_to(to)
            .ok_or(BattleError::IllegalMove { from, to })?;
        Ok(Action::MoveRequested { from, to, cost })
    }

    pub fn request_attack(&self, to: GridPosition) -> Result<Action> {
        let from = self.selected.ok_or(BattleError::NoSelection)?;
        if !self.targets.contains(&to) {
            return Err(BattleError::IllegalTarget { from, to });
        }
        Ok(Action::AttackRequested { from, to })
    }
}
