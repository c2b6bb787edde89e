//! HEXFIELD Core - Tactical hex battlefield rules
//!
//! This crate provides the rules engine behind the battlefield view:
//! - Hex geometry (odd-r offset grid <-> axial coordinates)
//! - Zone classification (allegiance, depth, lane)
//! - Movement costs (engagement, zone of control, frontline friction)
//! - Pathfinding and legal-move sets
//! - Attack targeting
//!
//! Everything is a pure function of the battlefield and placement passed
//! in; callers own the placement map and apply the actions they get back.

pub mod hex;
pub mod unit;
pub mod zone;
pub mod cost;
pub mod path;
pub mod target;
pub mod engine;
pub mod session;
pub mod scenario;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use hex::{Axial, GridPosition, LaneId, DIRECTIONS, to_axial, to_grid, neighbors, distance, lane_of};
pub use unit::{PlacementMap, PlayerId, Unit, UnitId, UnitKind};
pub use zone::{Allegiance, Battlefield, Depth, Zone};
pub use cost::{Cost, MovementCost, StandardCost, is_engaged};
pub use path::{find_path, legal_moves, LegalMoves, PathResult};
pub use target::legal_targets;
pub use engine::Engine;
pub use session::{Action, Session};
pub use scenario::{PlacedUnit, Scenario};
pub use config::{EngineConfig, SearchStrategy};
pub use error::{BattleError, Result};
