//! Shortest-cost search over the zone graph and legal-move derivation

use crate::config::SearchStrategy;
use crate::cost::{Cost, MovementCost};
use crate::hex::{to_axial, Axial, GridPosition};
use crate::unit::{PlacementMap, Unit};
use crate::zone::Battlefield;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use tracing::trace;

/// Route from start to destination, both inclusive
///
/// An empty path means no route exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<Axial>,
    pub total_cost: u32,
}

impl PathResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn destination(&self) -> Option<Axial> {
        self.path.last().copied()
    }

    /// Number of hexes moved
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Every destination a unit can reach this activation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub origin: GridPosition,
    pub destinations: BTreeMap<GridPosition, PathResult>,
}

impl LegalMoves {
    /// Destinations only, row-major
    pub fn positions(&self) -> BTreeSet<GridPosition> {
        self.destinations.keys().copied().collect()
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        self.destinations.contains_key(&pos)
    }

    pub fn cost_to(&self, pos: GridPosition) -> Option<u32> {
        self.destinations.get(&pos).map(|p| p.total_cost)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Frontier key: (estimated total, row, col), smallest first
type FrontierKey = Reverse<(u32, i32, i32)>;

/// Cheapest route for `unit` from `start` to `dest`
///
/// Intermediate zones must be empty; the destination's occupancy is left to
/// the caller. Equal-cost frontier entries are expanded in (row, col) order.
///
/// Panics if `start` or `dest` is off the battlefield.
pub fn find_path<C: MovementCost + ?Sized>(
    start: Axial,
    dest: Axial,
    unit: &Unit,
    placement: &PlacementMap,
    field: &Battlefield,
    cost_model: &C,
    strategy: SearchStrategy,
) -> PathResult {
    assert!(field.contains(start), "path start {} is off the battlefield", start);
    assert!(field.contains(dest), "path destination {} is off the battlefield", dest);

    if start == dest {
        return PathResult {
            path: vec![start],
            total_cost: 0,
        };
    }

    let heuristic = |at: Axial| -> u32 {
        match strategy {
            SearchStrategy::AStar => at.distance_to(dest) as u32,
            SearchStrategy::Dijkstra => 0,
        }
    };

    let mut open: BinaryHeap<FrontierKey> = BinaryHeap::new();
    let mut g_scores: FxHashMap<Axial, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Axial, Axial> = FxHashMap::default();
    let mut closed: FxHashSet<Axial> = FxHashSet::default();

    let start_pos = start.to_grid();
    g_scores.insert(start, 0);
    open.push(Reverse((heuristic(start), start_pos.row, start_pos.col)));

    while let Some(Reverse((_, row, col))) = open.pop() {
        let current = to_axial(GridPosition::new(row, col));
        if !closed.insert(current) {
            continue;
        }

        let current_g = g_scores[&current];
        if current == dest {
            return PathResult {
                path: reconstruct_path(&came_from, dest),
                total_cost: current_g,
            };
        }

        let Some(from_zone) = field.zone_at(current) else {
            continue;
        };
        trace!(row, col, g = current_g, "expanding");

        for to_zone in field.neighbors_in_bounds(current) {
            if closed.contains(&to_zone.axial) {
                continue;
            }
            if to_zone.axial != dest && !to_zone.is_empty() {
                continue;
            }

            let step = match cost_model.step_cost(unit, from_zone, to_zone, 1, placement) {
                Cost::Finite(c) => c,
                Cost::Impassable => continue,
            };

            let tentative = current_g.saturating_add(step);
            let known = g_scores.get(&to_zone.axial).copied().unwrap_or(u32::MAX);
            if tentative < known {
                g_scores.insert(to_zone.axial, tentative);
                came_from.insert(to_zone.axial, current);
                open.push(Reverse((
                    tentative.saturating_add(heuristic(to_zone.axial)),
                    to_zone.position.row,
                    to_zone.position.col,
                )));
            }
        }
    }

    PathResult::none()
}

fn reconstruct_path(came_from: &FxHashMap<Axial, Axial>, mut current: Axial) -> Vec<Axial> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Every empty zone `unit` can reach from `origin` within its move speed
///
/// Runs one search per empty zone; battlefields are small enough that this
/// stays cheap.
pub fn legal_moves<C: MovementCost + ?Sized>(
    unit: &Unit,
    origin: GridPosition,
    placement: &PlacementMap,
    field: &Battlefield,
    cost_model: &C,
    strategy: SearchStrategy,
) -> LegalMoves {
    let start = to_axial(origin);
    let mut destinations = BTreeMap::new();

    for zone in field.empty_zones() {
        let result = find_path(start, zone.axial, unit, placement, field, cost_model, strategy);
        if !result.is_empty() && result.total_cost <= unit.move_speed {
            destinations.insert(zone.position, result);
        }
    }

    LegalMoves {
        origin,
        destinations,
    }
}
