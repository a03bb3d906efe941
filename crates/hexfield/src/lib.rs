//! Hexfield: a hexagonal-grid spatial engine for turn-based tactical
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hexfield sub-crates. For most users, adding `hexfield` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexfield::prelude::*;
//!
//! // Shared coordinate cache; every grid of a given radius reuses one
//! // enumeration.
//! let cache = CoordCache::new();
//!
//! // A radius-3 map with a short wall, sight tables precomputed.
//! let mut map: Map<()> = Map::new(3, &cache).unwrap();
//! map.set_terrain(AxialCoord::new(0, 0), HexType::Wall);
//! map.precompute_visibility().unwrap();
//! assert!(!map
//!     .is_visible(AxialCoord::new(-2, 0), AxialCoord::new(2, 0))
//!     .unwrap());
//!
//! // A distance field rooted at the western rim.
//! let mut finder = Pathfinder::new(3, &cache);
//! finder.pathfind_from(&map, AxialCoord::new(-3, 0), OccupancyPolicy::Ignore);
//! let path = finder.path_to(AxialCoord::new(3, 0));
//! assert_eq!(*path.last().unwrap(), AxialCoord::new(-3, 0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`coords`] | `hexfield-core` | Axial/cube coordinates, pair keys |
//! | [`grid`] | `hexfield-grid` | Dense grid storage, coordinate cache |
//! | [`map`] | `hexfield-map` | Terrain, buffs, sight tables, persistence |
//! | [`path`] | `hexfield-path` | BFS distance fields and movement |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate algebra and pair keying (`hexfield-core`).
///
/// [`coords::AxialCoord`] and [`coords::CubeCoord`] are the two
/// interchangeable hex addressing schemes; [`coords::PairKey`] memoizes
/// pairwise queries.
pub use hexfield_core as coords;

/// Dense grid storage and the shared coordinate cache (`hexfield-grid`).
///
/// [`grid::HexGrid`] stores one value per cell; [`grid::CoordCache`] is
/// the injected, mutex-guarded radius enumeration shared by every grid.
pub use hexfield_grid as grid;

/// Terrain maps, line of sight, and persistence (`hexfield-map`).
///
/// [`map::Map`] owns terrain and the precomputed sight tables;
/// [`map::MapRepresentation`] is the JSON persistence projection.
pub use hexfield_map as map;

/// BFS distance fields and movement (`hexfield-path`).
///
/// [`path::Pathfinder`] builds per-source distance/predecessor fields and
/// reconstructs budget-limited paths.
pub use hexfield_path as path;

/// Common imports for typical hexfield usage.
///
/// ```rust
/// use hexfield::prelude::*;
/// ```
pub mod prelude {
    pub use hexfield_core::{AxialCoord, CubeCoord, PairKey};
    pub use hexfield_grid::{CoordCache, HexGrid};
    pub use hexfield_map::{AreaBuff, HexType, Map, MapError, MapRepresentation};
    pub use hexfield_path::{
        ActorId, MoveHost, OccupancyPolicy, OccupancyView, PathError, Pathfinder,
    };
}
