//! Attack targeting

use crate::hex::GridPosition;
use crate::unit::{PlacementMap, Unit};
use crate::zone::{Battlefield, Zone};
use std::collections::BTreeSet;

/// Occupied zones `attacker` may strike from `attacker_zone`
pub fn legal_targets(
    attacker: &Unit,
    attacker_zone: &Zone,
    placement: &PlacementMap,
    field: &Battlefield,
) -> BTreeSet<GridPosition> {
    let (range_min, range_max) = attacker.effective_range();

    field
        .zones()
        .iter()
        .filter(|zone| {
            let Some(occupant) = placement.get(&zone.position) else {
                return false;
            };
            let dist = attacker_zone.axial.distance_to(zone.axial) as u32;
            if dist == 0 || dist < range_min || dist > range_max {
                return false;
            }
            occupant.is_enemy_of(attacker) || attacker.friendly_fire_allowed
        })
        .map(|zone| zone.position)
        .collect()
}
