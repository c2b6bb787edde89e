//! Unit definitions read by the movement and targeting rules

use crate::hex::GridPosition;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a caller-owned unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Controlling player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

/// Attack profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    #[default]
    Melee,
    Ranged,
}

/// Unit as seen by the rules engine
///
/// Only the fields below parameterize cost and range; health and card data
/// stay with the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerId,
    #[serde(default)]
    pub kind: UnitKind,
    pub move_speed: u32,
    #[serde(default)]
    pub melee_only: bool,
    #[serde(default)]
    pub range_min: Option<u32>,
    #[serde(default)]
    pub range_max: Option<u32>,
    #[serde(default)]
    pub friendly_fire_allowed: bool,
    #[serde(default)]
    pub zoc_cost_modifier: Option<u32>,
    #[serde(default)]
    pub can_disengage_without_penalty: bool,
}

/// Caller-owned placement: at most one unit per zone
pub type PlacementMap = FxHashMap<GridPosition, Unit>;

/// Default ranged reach when the unit does not specify one
const RANGED_DEFAULT: (u32, u32) = (2, 3);
const MELEE_DEFAULT: (u32, u32) = (1, 1);

impl Unit {
    /// Plain melee unit
    pub fn new(id: u32, owner: u8, move_speed: u32) -> Self {
        Self {
            id: UnitId(id),
            owner: PlayerId(owner),
            kind: UnitKind::Melee,
            move_speed,
            melee_only: false,
            range_min: None,
            range_max: None,
            friendly_fire_allowed: false,
            zoc_cost_modifier: None,
            can_disengage_without_penalty: false,
        }
    }

    /// Plain ranged unit
    pub fn ranged(id: u32, owner: u8, move_speed: u32) -> Self {
        Self {
            kind: UnitKind::Ranged,
            ..Self::new(id, owner, move_speed)
        }
    }

    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.range_min = Some(min);
        self.range_max = Some(max);
        self
    }

    pub fn with_melee_only(mut self) -> Self {
        self.melee_only = true;
        self
    }

    pub fn with_friendly_fire(mut self, allowed: bool) -> Self {
        self.friendly_fire_allowed = allowed;
        self
    }

    pub fn with_zoc_cost(mut self, cost: u32) -> Self {
        self.zoc_cost_modifier = Some(cost);
        self
    }

    pub fn with_disengage(mut self) -> Self {
        self.can_disengage_without_penalty = true;
        self
    }

    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.owner != other.owner
    }

    /// Inclusive (min, max) attack distance after defaults
    pub fn effective_range(&self) -> (u32, u32) {
        if self.melee_only {
            return MELEE_DEFAULT;
        }
        let (default_min, default_max) = match self.kind {
            UnitKind::Ranged => RANGED_DEFAULT,
            UnitKind::Melee => MELEE_DEFAULT,
        };
        (
            self.range_min.unwrap_or(default_min),
            self.range_max.unwrap_or(default_max),
        )
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
