//! Axial hex coordinates (pointy-top orientation).

use crate::cube::CubeCoord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// The six axial neighbour offsets, in the fixed order the pathfinder
/// visits them: W, E, NW, SE, NE, SW.
///
/// This order is part of the engine's determinism contract — ties within a
/// BFS distance layer are resolved by queue insertion order, which follows
/// this table.
pub const NEIGHBOUR_OFFSETS: [AxialCoord; 6] = [
    AxialCoord::new(-1, 0),
    AxialCoord::new(1, 0),
    AxialCoord::new(0, -1),
    AxialCoord::new(0, 1),
    AxialCoord::new(1, -1),
    AxialCoord::new(-1, 1),
];

/// A hex cell address in axial form: two independent integer axes.
///
/// Interchangeable with [`CubeCoord`]; `to_cube` and
/// [`CubeCoord::to_axial`] are total, lossless, and mutually inverse.
///
/// # Examples
///
/// ```
/// use hexfield_core::AxialCoord;
///
/// let a = AxialCoord::new(2, -1);
/// assert_eq!(a.to_cube().to_axial(), a);
/// assert_eq!(a.distance(AxialCoord::ORIGIN), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AxialCoord {
    /// First axis (cube X).
    pub x: i32,
    /// Second axis (cube Z).
    pub y: i32,
}

impl AxialCoord {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: AxialCoord = AxialCoord::new(0, 0);

    /// Create an axial coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to cube form: `(x, -x-y, y)`.
    pub const fn to_cube(self) -> CubeCoord {
        CubeCoord {
            x: self.x,
            y: -self.x - self.y,
            z: self.y,
        }
    }

    /// Hex-grid distance to `other`: `(|Δx| + |Δx+Δy| + |Δy|) / 2`.
    ///
    /// The numerator is always even (the implied cube axes sum to zero),
    /// so the division is exact.
    pub fn distance(self, other: AxialCoord) -> u32 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);
        ((dx.abs() + (dx + dy).abs() + dy.abs()) / 2) as u32
    }

    /// The six neighbouring cells, in [`NEIGHBOUR_OFFSETS`] order.
    pub fn neighbours(self) -> [AxialCoord; 6] {
        let mut out = [AxialCoord::ORIGIN; 6];
        for (slot, off) in out.iter_mut().zip(NEIGHBOUR_OFFSETS) {
            *slot = self + off;
        }
        out
    }
}

impl Add for AxialCoord {
    type Output = AxialCoord;

    fn add(self, rhs: AxialCoord) -> AxialCoord {
        AxialCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for AxialCoord {
    type Output = AxialCoord;

    fn sub(self, rhs: AxialCoord) -> AxialCoord {
        AxialCoord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for AxialCoord {
    type Output = AxialCoord;

    fn mul(self, rhs: i32) -> AxialCoord {
        AxialCoord::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
