//! Integration tests for the HEXFIELD rules engine
//!
//! Tests the full stack: scenario -> battlefield -> engine -> session

use hexfield_core::{
    cost::StandardCost,
    hex::{distance, neighbors, to_axial, to_grid, Axial, GridPosition},
    Battlefield, BattleError, Cost, Depth, Engine, EngineConfig, MovementCost, PlacementMap,
    Scenario, SearchStrategy, Session, Unit,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const ROWS: i32 = 6;
const COLS: i32 = 5;

fn pos(row: i32, col: i32) -> GridPosition {
    GridPosition::new(row, col)
}

fn board(units: &[(GridPosition, Unit)]) -> (Battlefield, PlacementMap) {
    let mut placement = PlacementMap::default();
    for (p, unit) in units {
        placement.insert(*p, unit.clone());
    }
    let field = Battlefield::build(ROWS, COLS, &placement).unwrap();
    (field, placement)
}

/// Random placement with at most `count` units split between two players
fn random_placement(rng: &mut ChaCha8Rng, rows: i32, cols: i32, count: usize) -> PlacementMap {
    let mut placement = PlacementMap::default();
    for id in 0..count as u32 {
        let p = pos(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let mut unit = Unit::new(id, rng.gen_range(0..2), rng.gen_range(1..=4));
        if rng.gen_bool(0.3) {
            unit = unit.with_disengage();
        }
        if rng.gen_bool(0.3) {
            unit = unit.with_zoc_cost(rng.gen_range(0..=4));
        }
        placement.insert(p, unit);
    }
    placement
}

// ============================================================================
// EXAMPLE SCENARIOS
// ============================================================================

#[test]
fn test_open_field_costs_equal_distance() {
    let mover = Unit::new(1, 0, 3);
    let start = pos(5, 2);
    let (field, placement) = board(&[(start, mover)]);
    let moves = Engine::default().legal_moves(&field, &placement, start).unwrap();

    for zone in field.empty_zones() {
        let d = distance(to_axial(start), zone.axial) as u32;
        if zone.depth == Depth::Backline && d <= 3 {
            assert_eq!(
                moves.cost_to(zone.position),
                Some(d),
                "{} should cost its distance",
                zone.position
            );
        }
    }

    for (p, result) in &moves.destinations {
        assert!(result.total_cost >= distance(to_axial(start), to_axial(*p)) as u32);
        assert!(result.total_cost <= 3);
    }

    // Frontline friction: row 3 is reachable, row 2 is not
    assert_eq!(moves.cost_to(pos(3, 2)), Some(3));
    assert!(moves.positions().iter().all(|p| p.row >= 3));
}

#[test]
fn test_enemy_zone_of_control_inflates_costs() {
    let mover = Unit::new(1, 0, 3);
    let start = pos(5, 2);
    let enemy_at = pos(3, 2);

    let (field, placement) = board(&[(start, mover.clone())]);
    let open = Engine::default().legal_moves(&field, &placement, start).unwrap();

    let (field, placement) = board(&[(start, mover.clone()), (enemy_at, Unit::new(2, 1, 2))]);
    let contested = Engine::default().legal_moves(&field, &placement, start).unwrap();

    let mut checked = 0;
    for n in neighbors(to_axial(enemy_at)) {
        let p = to_grid(n);
        let Some(open_cost) = open.cost_to(p) else { continue };
        // Either priced higher or pushed out of budget
        if let Some(cost) = contested.cost_to(p) {
            assert!(cost > open_cost, "{}: {} !> {}", p, cost, open_cost);
        }
        checked += 1;
    }
    assert!(checked > 0);
    assert_eq!(open.cost_to(pos(4, 2)), Some(1));
    assert_eq!(contested.cost_to(pos(4, 2)), Some(2));

    // With a looser cap the full default surcharge of 2 shows through
    let loose = Engine::new(EngineConfig::default().with_cost_cap_multiplier(3)).unwrap();
    let moves = loose.legal_moves(&field, &placement, start).unwrap();
    assert_eq!(moves.cost_to(pos(4, 2)), Some(1 + 2));
}

#[test]
fn test_melee_only_cannot_reach_two_hexes() {
    let attacker = Unit::ranged(1, 0, 2).with_melee_only();
    let (field, placement) = board(&[(pos(5, 2), attacker), (pos(3, 2), Unit::new(2, 1, 2))]);
    let targets = Engine::default().legal_targets(&field, &placement, pos(5, 2)).unwrap();
    assert!(!targets.contains(&pos(3, 2)));
}

#[test]
fn test_friendly_fire_controls_ally_targeting() {
    let archer = Unit::ranged(1, 0, 2).with_range(2, 3);
    let ally = Unit::new(2, 0, 2);

    let (field, placement) = board(&[(pos(5, 2), archer.clone()), (pos(3, 2), ally.clone())]);
    let targets = Engine::default().legal_targets(&field, &placement, pos(5, 2)).unwrap();
    assert!(!targets.contains(&pos(3, 2)));

    let archer = archer.with_friendly_fire(true);
    let (field, placement) = board(&[(pos(5, 2), archer), (pos(3, 2), ally)]);
    let targets = Engine::default().legal_targets(&field, &placement, pos(5, 2)).unwrap();
    assert!(targets.contains(&pos(3, 2)));
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[test]
fn test_invalid_dimensions() {
    let placement = PlacementMap::default();
    assert_eq!(
        Battlefield::build(0, 0, &placement),
        Err(BattleError::InvalidDimensions { rows: 0, cols: 0 })
    );
}

#[test]
fn test_selecting_empty_zone_is_an_error() {
    let (field, placement) = board(&[(pos(5, 2), Unit::new(1, 0, 3))]);
    let engine = Engine::default();
    assert_eq!(
        engine.legal_moves(&field, &placement, pos(0, 0)).unwrap_err(),
        BattleError::NoUnitAt(pos(0, 0))
    );

    let mut session = Session::new();
    assert!(session.select(&engine, &field, &placement, pos(0, 0)).is_err());
    assert_eq!(session.selected(), None);
}

#[test]
fn test_boxed_in_is_empty_not_error() {
    let (field, placement) = board(&[
        (pos(5, 0), Unit::new(1, 0, 3)),
        (pos(5, 1), Unit::new(2, 0, 3)),
        (pos(4, 0), Unit::new(3, 0, 3)),
        (pos(4, 1), Unit::new(4, 0, 3)),
    ]);
    let moves = Engine::default().legal_moves(&field, &placement, pos(5, 0)).unwrap();
    assert!(moves.is_empty());
}

// ============================================================================
// SESSION FLOW
// ============================================================================

#[test]
fn test_move_round_trip_through_caller() {
    let scenario = Scenario::default();
    let engine = Engine::default();
    let mut placement = scenario.placement().unwrap();
    let field = engine.build_battlefield(scenario.rows, scenario.cols, &placement).unwrap();

    let mut session = Session::new();
    session.select(&engine, &field, &placement, pos(4, 1)).unwrap();
    let dest = *session.legal_moves().positions().iter().next().unwrap();
    let action = session.request_move(dest).unwrap();

    // Caller applies, then regenerates zones
    let hexfield_core::Action::MoveRequested { from, to, .. } = action else {
        panic!("expected a move");
    };
    let unit = placement.remove(&from).unwrap();
    placement.insert(to, unit);
    let field = engine.build_battlefield(scenario.rows, scenario.cols, &placement).unwrap();

    assert!(field.zone(from).unwrap().is_empty());
    assert!(!field.zone(to).unwrap().is_empty());
    session.select(&engine, &field, &placement, to).unwrap();
    assert_eq!(session.selected(), Some(to));
}

#[test]
fn test_scenario_file_round_trip() {
    let path = std::env::temp_dir().join(format!("hexfield-it-{}.json", std::process::id()));
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let scenario = Scenario::random(&mut rng, "roundtrip", 6, 7, 5);
    scenario.save(&path).unwrap();
    let loaded = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, scenario);
}

#[test]
fn test_dijkstra_never_worse_than_astar() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let astar = Engine::default();
    let dijkstra = Engine::new(EngineConfig::dijkstra()).unwrap();
    assert_eq!(dijkstra.config().search, SearchStrategy::Dijkstra);

    for _ in 0..20 {
        let placement = random_placement(&mut rng, ROWS, COLS, 8);
        let field = Battlefield::build(ROWS, COLS, &placement).unwrap();
        for &from in placement.keys() {
            let a = astar.legal_moves(&field, &placement, from).unwrap();
            let d = dijkstra.legal_moves(&field, &placement, from).unwrap();
            assert!(a.positions().is_subset(&d.positions()));
            for p in a.positions() {
                assert!(d.cost_to(p) <= a.cost_to(p));
            }
        }
    }
}

// ============================================================================
// PROPERTIES (seeded random)
// ============================================================================

#[test]
fn test_coordinate_properties() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..1000 {
        let p = pos(rng.gen_range(0..50), rng.gen_range(0..50));
        assert_eq!(to_grid(to_axial(p)), p);

        let a = Axial::new(rng.gen_range(-30..30), rng.gen_range(-30..30));
        let b = Axial::new(rng.gen_range(-30..30), rng.gen_range(-30..30));
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0);
        let ns = neighbors(a);
        assert_eq!(ns.len(), 6);
        assert!(ns.iter().all(|&n| distance(a, n) == 1));
    }
}

#[test]
fn test_zone_coverage_random_sizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let rows = rng.gen_range(2..=6);
        let cols = rng.gen_range(3..=7);
        let placement = random_placement(&mut rng, rows, cols, 6);
        let field = Battlefield::build(rows, cols, &placement).unwrap();
        assert_eq!(field.zones().len(), (rows * cols) as usize);
        let unique: HashSet<_> = field.zones().iter().map(|z| z.position).collect();
        assert_eq!(unique.len(), (rows * cols) as usize);
        assert_eq!(field.zones().iter().filter(|z| !z.is_empty()).count(), placement.len());
    }
}

#[test]
fn test_cost_cap_and_engagement_hold() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let model = StandardCost::default();
    for _ in 0..30 {
        let placement = random_placement(&mut rng, ROWS, COLS, 10);
        let field = Battlefield::build(ROWS, COLS, &placement).unwrap();

        for (&at, unit) in &placement {
            let from = field.zone(at).unwrap();
            let engaged = hexfield_core::is_engaged(from.axial, unit.owner, &placement);

            for to in field.neighbors_in_bounds(from.axial) {
                let capped = model.step_cost(unit, from, to, 1, &placement);
                let raw = model.uncapped(unit, from, to, 1, &placement);
                if engaged && !unit.can_disengage_without_penalty {
                    assert_eq!(capped, Cost::Impassable);
                    continue;
                }
                let raw = raw.value().unwrap();
                assert_eq!(capped, Cost::Finite(raw.min(2)));
            }

            let moves = Engine::default().legal_moves(&field, &placement, at).unwrap();
            if engaged && !unit.can_disengage_without_penalty {
                assert!(moves.is_empty());
            }
            for (p, result) in &moves.destinations {
                assert!(placement.get(p).is_none());
                assert!(result.total_cost <= unit.move_speed);
                // Intermediate hexes are empty
                for step in &result.path[1..] {
                    assert!(placement.get(&to_grid(*step)).is_none());
                }
            }
        }
    }
}
