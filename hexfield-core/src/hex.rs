//! Hex geometry: odd-r offset storage grid and axial coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=SE, 2=SW, 3=W, 4=NW, 5=NE
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),   // E
    (0, 1),   // SE
    (-1, 1),  // SW
    (-1, 0),  // W
    (0, -1),  // NW
    (1, -1),  // NE
];

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Storage-grid address (row-major, odd rows shoved right by half a hex)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}

/// Lane classifier for lane-restricted abilities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaneId(pub i32);

impl Axial {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube component (q + r + s == 0)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance between two coordinates
    pub fn distance_to(&self, other: Axial) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Axial {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Axial::new(self.q + dq, self.r + dr)
    }

    /// All six neighbors in E, SE, SW, W, NW, NE order
    pub fn neighbors(&self) -> [Axial; 6] {
        std::array::from_fn(|dir| self.neighbor(dir))
    }

    pub fn to_grid(self) -> GridPosition {
        to_grid(self)
    }

    pub fn lane(self) -> LaneId {
        lane_of(self)
    }
}

impl GridPosition {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn to_axial(self) -> Axial {
        to_axial(self)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.q, self.r)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

// `row & 1` is 1 for odd rows on both sides of zero, so `row - (row & 1)` is
// even, never overflows, and halves exactly. The column shift wraps, which
// keeps both conversions total and exact inverses of each other on all of i32.

/// Offset (row, col) -> axial
pub fn to_axial(pos: GridPosition) -> Axial {
    let q = pos.col.wrapping_sub((pos.row - (pos.row & 1)) / 2);
    Axial::new(q, pos.row)
}

/// Axial -> offset (row, col)
pub fn to_grid(axial: Axial) -> GridPosition {
    let col = axial.q.wrapping_add((axial.r - (axial.r & 1)) / 2);
    GridPosition::new(axial.r, col)
}

/// The six hex-adjacent coordinates in E, SE, SW, W, NW, NE order
pub fn neighbors(axial: Axial) -> [Axial; 6] {
    axial.neighbors()
}

/// Cube distance
pub fn distance(a: Axial, b: Axial) -> i32 {
    a.distance_to(b)
}

/// Lane is the storage column the hex sits in
pub fn lane_of(axial: Axial) -> LaneId {
    LaneId(to_grid(axial).col)
}
