//! Cube hex coordinates: three axes constrained to sum to zero.

use crate::axial::AxialCoord;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A hex cell address in cube form.
///
/// Invariant: `x + y + z == 0`. The Y axis is redundant — it is always
/// recoverable as `-x - z` — which is what makes the axial form lossless.
/// Constructors uphold the invariant; [`CubeCoord::new`] checks it in
/// debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeCoord {
    /// First axis (axial x).
    pub x: i32,
    /// Dependent middle axis, always `-x - z`.
    pub y: i32,
    /// Third axis (axial y).
    pub z: i32,
}

impl CubeCoord {
    /// The origin cell `(0, 0, 0)`.
    pub const ORIGIN: CubeCoord = CubeCoord { x: 0, y: 0, z: 0 };

    /// Create a cube coordinate from all three axes.
    ///
    /// Debug-asserts the zero-sum invariant; prefer [`CubeCoord::from_xz`]
    /// when the middle axis is not already at hand.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        debug_assert_eq!(x + y + z, 0, "cube axes must sum to zero");
        Self { x, y, z }
    }

    /// Create a cube coordinate from the two independent axes, deriving
    /// the middle axis.
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Convert to axial form: `(x, z)`.
    pub const fn to_axial(self) -> AxialCoord {
        AxialCoord::new(self.x, self.z)
    }

    /// Hex-grid distance to `other`: `(|ΔX| + |ΔY| + |ΔZ|) / 2`.
    pub fn distance(self, other: CubeCoord) -> u32 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);
        let dz = (self.z as i64) - (other.z as i64);
        ((dx.abs() + dy.abs() + dz.abs()) / 2) as u32
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;

    fn add(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for CubeCoord {
    type Output = CubeCoord;

    fn mul(self, rhs: i32) -> CubeCoord {
        CubeCoord::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
