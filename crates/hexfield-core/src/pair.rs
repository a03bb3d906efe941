//! Bijective packing of a coordinate pair into a single integer key.

use crate::axial::AxialCoord;
use crate::error::CoordError;

/// Magnitude bound on every axis of a pair-keyed coordinate.
///
/// Each axis occupies a fixed two-decimal-digit slot in the packed key.
/// This is a hard precondition: [`PairKey::new`] rejects any axis with
/// `|v| >= 100`, which would overflow its slot outright.
///
/// Note that signed axes span 199 values against a slot width of 100, so
/// adjacent slots stay disjoint — and keys collision-free — only while
/// every axis satisfies `|v| < PAIR_AXIS_LIMIT / 2`. Consumers that rely
/// on key uniqueness must bound their coordinates to that half-range.
pub const PAIR_AXIS_LIMIT: i32 = 100;

/// A memoization key for an ordered pair of coordinates.
///
/// Packs the four axes by fixed-width decimal slotting:
/// `a.x * 1_000_000 + a.y * 10_000 + b.x * 100 + b.y`. The key is
/// order-sensitive — `(a, b)` and `(b, a)` produce different keys — which
/// is what pairwise tables (visibility, line draw) require.
///
/// # Examples
///
/// ```
/// use hexfield_core::{AxialCoord, PairKey};
///
/// let a = AxialCoord::new(1, -2);
/// let b = AxialCoord::new(0, 3);
/// assert_ne!(PairKey::new(a, b).unwrap(), PairKey::new(b, a).unwrap());
/// assert!(PairKey::new(AxialCoord::new(100, 0), b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(i64);

impl PairKey {
    /// Pack the ordered pair `(a, b)` into a key.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::PairAxisOutOfRange`] if any axis of either
    /// coordinate has magnitude `>= 100`.
    pub fn new(a: AxialCoord, b: AxialCoord) -> Result<Self, CoordError> {
        for coord in [a, b] {
            for value in [coord.x, coord.y] {
                if value.abs() >= PAIR_AXIS_LIMIT {
                    return Err(CoordError::PairAxisOutOfRange { coord, value });
                }
            }
        }
        Ok(Self(
            (a.x as i64) * 1_000_000 + (a.y as i64) * 10_000 + (b.x as i64) * 100 + (b.y as i64),
        ))
    }

    /// The raw packed value.
    pub fn value(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn c(x: i32, y: i32) -> AxialCoord {
        AxialCoord::new(x, y)
    }

    #[test]
    fn accepts_axes_up_to_99() {
        assert!(PairKey::new(c(99, -99), c(-99, 99)).is_ok());
    }

    #[test]
    fn rejects_axis_at_limit() {
        for bad in [c(100, 0), c(0, 100), c(-100, 0), c(0, -100)] {
            assert!(PairKey::new(bad, c(0, 0)).is_err(), "first slot {bad}");
            assert!(PairKey::new(c(0, 0), bad).is_err(), "second slot {bad}");
        }
    }

    #[test]
    fn rejection_names_the_offending_axis() {
        let err = PairKey::new(c(0, 0), c(3, -120)).unwrap_err();
        assert_eq!(
            err,
            CoordError::PairAxisOutOfRange {
                coord: c(3, -120),
                value: -120,
            }
        );
    }

    #[test]
    fn adjacent_slots_overlap_at_half_the_limit() {
        // (1, -50) and (0, 50) pack identically: the y slot borrows from
        // the x slot once a magnitude reaches 50. Key uniqueness only
        // holds over the half-range, which map construction enforces.
        let a = PairKey::new(c(0, 0), c(1, -50)).unwrap();
        let b = PairKey::new(c(0, 0), c(0, 50)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unique_over_the_half_range_rim() {
        // Largest coordinates a size-49 map can produce still key apart.
        let mut seen = HashSet::new();
        for coords in [
            (c(49, -49), c(-49, 49)),
            (c(49, -49), c(49, -49)),
            (c(-49, 49), c(49, -49)),
            (c(48, -48), c(-49, 49)),
            (c(49, -48), c(-49, 49)),
        ] {
            let key = PairKey::new(coords.0, coords.1).unwrap();
            assert!(seen.insert(key), "collision for ({}, {})", coords.0, coords.1);
        }
    }

    #[test]
    fn is_order_sensitive() {
        let a = c(2, -1);
        let b = c(-1, 2);
        assert_ne!(PairKey::new(a, b).unwrap(), PairKey::new(b, a).unwrap());
    }

    #[test]
    fn unique_over_a_radius_three_disk() {
        // All coordinates a tactical map of radius 3 can produce.
        let mut coords = Vec::new();
        for x in -3i32..=3 {
            for y in -3i32..=3 {
                if (x + y).abs() <= 3 {
                    coords.push(c(x, y));
                }
            }
        }

        let mut seen = HashSet::new();
        for &a in &coords {
            for &b in &coords {
                let key = PairKey::new(a, b).unwrap();
                assert!(seen.insert(key), "collision for ({a}, {b})");
            }
        }
    }
}
