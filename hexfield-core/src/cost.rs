//! Movement cost model: engagement, zone of control, frontline friction

use crate::config::EngineConfig;
use crate::hex::{to_grid, Axial};
use crate::unit::{PlacementMap, PlayerId, Unit};
use crate::zone::{Depth, Zone};
use serde::{Deserialize, Serialize};

/// Price of one step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cost {
    Finite(u32),
    Impassable,
}

impl Cost {
    pub fn is_passable(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn value(&self) -> Option<u32> {
        match *self {
            Cost::Finite(c) => Some(c),
            Cost::Impassable => None,
        }
    }
}

/// Prices a single step between adjacent zones
///
/// Any `Fn(&Unit, &Zone, &Zone, u32, &PlacementMap) -> Cost` closure works as a
/// replacement model for terrain the standard rules don't cover.
pub trait MovementCost {
    fn step_cost(
        &self,
        unit: &Unit,
        from: &Zone,
        to: &Zone,
        base_distance: u32,
        placement: &PlacementMap,
    ) -> Cost;
}

impl<F> MovementCost for F
where
    F: Fn(&Unit, &Zone, &Zone, u32, &PlacementMap) -> Cost,
{
    fn step_cost(
        &self,
        unit: &Unit,
        from: &Zone,
        to: &Zone,
        base_distance: u32,
        placement: &PlacementMap,
    ) -> Cost {
        self(unit, from, to, base_distance, placement)
    }
}

/// Standard rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardCost {
    pub default_zoc_cost: u32,
    pub frontline_friction: u32,
    pub cost_cap_multiplier: u32,
}

impl Default for StandardCost {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl StandardCost {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            default_zoc_cost: config.default_zoc_cost,
            frontline_friction: config.frontline_friction,
            cost_cap_multiplier: config.cost_cap_multiplier,
        }
    }

    /// Cost before the cap is applied
    pub fn uncapped(
        &self,
        unit: &Unit,
        from: &Zone,
        to: &Zone,
        base_distance: u32,
        placement: &PlacementMap,
    ) -> Cost {
        assert_eq!(
            from.axial.distance_to(to.axial),
            1,
            "step from {} to {} is not between adjacent zones",
            from.position,
            to.position
        );

        // Engagement short-circuits everything else
        let standing_here = placement
            .get(&from.position)
            .is_some_and(|occupant| occupant.id == unit.id);
        if standing_here
            && !unit.can_disengage_without_penalty
            && is_engaged(from.axial, unit.owner, placement)
        {
            return Cost::Impassable;
        }

        let mut cost = base_distance;

        if is_engaged(to.axial, unit.owner, placement) {
            cost = cost.saturating_add(unit.zoc_cost_modifier.unwrap_or(self.default_zoc_cost));
        }

        if to.depth == Depth::Frontline {
            cost = cost.saturating_add(self.frontline_friction);
        }

        Cost::Finite(cost)
    }
}

impl MovementCost for StandardCost {
    fn step_cost(
        &self,
        unit: &Unit,
        from: &Zone,
        to: &Zone,
        base_distance: u32,
        placement: &PlacementMap,
    ) -> Cost {
        match self.uncapped(unit, from, to, base_distance, placement) {
            Cost::Finite(cost) => {
                Cost::Finite(cost.min(base_distance.saturating_mul(self.cost_cap_multiplier)))
            }
            Cost::Impassable => Cost::Impassable,
        }
    }
}

/// True when a unit hostile to `owner` stands on a hex adjacent to `at`
pub fn is_engaged(at: Axial, owner: PlayerId, placement: &PlacementMap) -> bool {
    at.neighbors().iter().any(|&n| {
        placement
            .get(&to_grid(n))
            .is_some_and(|other| other.owner != owner)
    })
}
