//! Flat serialization projection of a map's terrain.

use crate::error::MapError;
use crate::map::{HexType, Map};
use hexfield_core::AxialCoord;
use serde::{Deserialize, Serialize};

/// One persisted cell: a coordinate and its terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    /// The cell's coordinate.
    pub coord: AxialCoord,
    /// The terrain occupying it.
    pub terrain: HexType,
}

/// A flat, order-independent list of `(coordinate, terrain)` pairs plus
/// the map size — the persistence contract for a map's terrain.
///
/// The cell list is a projection: loading applies each listed cell by
/// direct assignment, independent of any iteration-order guarantee on the
/// live grid. Buffs, starting positions, and derived caches are not part
/// of the format.
///
/// # Examples
///
/// ```
/// use hexfield_grid::CoordCache;
/// use hexfield_map::{Map, MapRepresentation};
///
/// let cache = CoordCache::new();
/// let map: Map<()> = Map::new(2, &cache).unwrap();
/// let repr = MapRepresentation::from_map(&map);
/// assert_eq!(repr.cells.len(), map.all_coords().len());
///
/// let json = repr.to_json().unwrap();
/// let back = MapRepresentation::from_json(&json).unwrap();
/// assert_eq!(back, repr);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRepresentation {
    /// Radius of the represented map.
    pub size: i32,
    /// One record per valid coordinate.
    pub cells: Vec<CellRecord>,
}

impl MapRepresentation {
    /// Project a map's terrain into the flat representation.
    pub fn from_map<B>(map: &Map<B>) -> Self {
        Self {
            size: map.size(),
            cells: map
                .all_coords()
                .iter()
                .map(|&coord| CellRecord {
                    coord,
                    terrain: map.terrain(coord),
                })
                .collect(),
        }
    }

    /// Apply every listed cell's terrain to `map` by direct assignment.
    ///
    /// Derived caches are left stale; the caller recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::SizeMismatch`] unless the sizes match exactly —
    /// resizing a live map is unimplemented, so a mismatch is fatal.
    pub fn apply_to<B>(&self, map: &mut Map<B>) -> Result<(), MapError> {
        if self.size != map.size() {
            return Err(MapError::SizeMismatch {
                expected: map.size(),
                found: self.size,
            });
        }
        for cell in &self.cells {
            map.set_terrain(cell.coord, cell.terrain);
        }
        Ok(())
    }

    /// Encode as a self-describing JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from a JSON document produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Json`] on a malformed document.
    pub fn from_json(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }
}
