//! Shared memoization of per-radius coordinate enumerations.

use hexfield_core::{AxialCoord, CubeCoord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A shared cache of "all valid coordinates for radius N".
///
/// Enumerating a hex disk is a triple-nested cube-axis scan with a
/// zero-sum filter — cheap to look up, expensive enough to recompute that
/// every grid of a given radius shares one enumeration. Entries are
/// append-only and never invalidated; radius values are small and finite
/// in practice.
///
/// The cache is an explicit object: construct one, hand it (by reference
/// or inside an `Arc`) to whichever layer builds grids and maps. First
/// population of a radius is mutex-guarded and safe to race from multiple
/// threads; the returned `Arc` slices are lock-free to read.
///
/// # Examples
///
/// ```
/// use hexfield_grid::CoordCache;
///
/// let cache = CoordCache::new();
/// assert_eq!(cache.coords_within(2).len(), 19);
/// // Second request for the same radius reuses the shared slice.
/// assert!(std::sync::Arc::ptr_eq(
///     &cache.coords_within(2),
///     &cache.coords_within(2),
/// ));
/// ```
#[derive(Debug, Default)]
pub struct CoordCache {
    inner: Mutex<HashMap<i32, Arc<[AxialCoord]>>>,
}

impl CoordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// All valid coordinates within `radius` of the origin, in the
    /// canonical enumeration order (ascending cube X, then cube Y).
    ///
    /// Computed on first request per distinct radius, then shared.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative.
    pub fn coords_within(&self, radius: i32) -> Arc<[AxialCoord]> {
        assert!(radius >= 0, "radius must be non-negative, got {radius}");
        let mut inner = self.inner.lock().expect("coordinate cache poisoned");
        inner
            .entry(radius)
            .or_insert_with(|| enumerate_disk(radius).into())
            .clone()
    }

    /// All cells within `radius` of `center`: the cached disk, offset.
    ///
    /// Used for range queries (ability range, area buffs) without
    /// re-deriving geometry at query time. The result is not bounds-checked
    /// against any grid; callers filter with their own validity rule.
    pub fn range(&self, center: AxialCoord, radius: i32) -> Vec<AxialCoord> {
        self.coords_within(radius)
            .iter()
            .map(|&d| center + d)
            .collect()
    }
}

/// Triple-nested cube scan with a zero-sum filter.
///
/// For fixed `(x, y)` exactly one `z` passes the filter, so the order is
/// effectively ascending `(x, y)` — deterministic, which downstream
/// pair-table iteration relies on.
fn enumerate_disk(radius: i32) -> Vec<AxialCoord> {
    let mut out = Vec::new();
    for x in -radius..=radius {
        for y in -radius..=radius {
            for z in -radius..=radius {
                if x + y + z == 0 {
                    out.push(CubeCoord::new(x, y, z).to_axial());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn disk_sizes_match_the_hex_formula() {
        let cache = CoordCache::new();
        for (radius, expected) in [(0, 1), (1, 7), (2, 19), (3, 37)] {
            assert_eq!(cache.coords_within(radius).len(), expected);
        }
    }

    #[test]
    fn every_coordinate_is_on_the_disk() {
        let cache = CoordCache::new();
        for &c in cache.coords_within(3).iter() {
            assert!(c.distance(AxialCoord::ORIGIN) <= 3);
        }
    }

    #[test]
    fn enumeration_order_is_deterministic() {
        let a = enumerate_disk(2);
        let b = enumerate_disk(2);
        assert_eq!(a, b);
        // Ascending cube-x: the first entry is the far-west rim cell.
        assert_eq!(a[0], AxialCoord::new(-2, 2));
    }

    #[test]
    fn second_request_shares_the_slice() {
        let cache = CoordCache::new();
        let first = cache.coords_within(1);
        let second = cache.coords_within(1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn distinct_radii_get_distinct_entries() {
        let cache = CoordCache::new();
        assert_ne!(cache.coords_within(1).len(), cache.coords_within(2).len());
    }

    #[test]
    fn concurrent_first_access_is_safe() {
        let cache = Arc::new(CoordCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.coords_within(5).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 91);
        }
    }

    #[test]
    fn range_offsets_the_cached_disk() {
        let cache = CoordCache::new();
        let center = AxialCoord::new(2, -1);
        let cells = cache.range(center, 1);
        assert_eq!(cells.len(), 7);
        for c in cells {
            assert!(center.distance(c) <= 1);
        }
    }
}
