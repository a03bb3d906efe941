//! Terrain map for the hexfield spatial engine.
//!
//! [`Map`] owns a terrain grid, a list of area buffs, starting-position
//! metadata, and two derived caches keyed by coordinate pair: the
//! visibility table ("can A see B unobstructed") and the line-draw table
//! (the deterministic shortest geometric line between A and B). Both are
//! built in one pass by [`Map::precompute_visibility`] and must be rebuilt
//! after any terrain change — there is no incremental update.
//!
//! [`MapRepresentation`] is the flat, order-independent serialization
//! projection of a map's terrain, exchanged as self-describing JSON text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod linedraw;
pub mod map;
pub mod repr;

pub use error::MapError;
pub use linedraw::cube_line;
pub use map::{AreaBuff, HexType, Map};
pub use repr::{CellRecord, MapRepresentation};
