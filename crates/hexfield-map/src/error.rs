//! Error types for map construction, queries, and persistence.

use hexfield_core::{AxialCoord, CoordError};
use std::fmt;

/// Errors arising from map operations.
#[derive(Debug)]
pub enum MapError {
    /// Requested map size is outside the supported range.
    ///
    /// Sizes must stay below half the pair-key axis bound so every pair
    /// of map coordinates packs to a distinct key.
    InvalidSize {
        /// The rejected size.
        size: i32,
        /// Largest accepted size.
        max: i32,
    },
    /// A visibility or line query ran before [`precompute_visibility`]
    /// populated the tables (or against a pair outside the grid).
    ///
    /// [`precompute_visibility`]: crate::Map::precompute_visibility
    NotPrecomputed {
        /// Query origin.
        from: AxialCoord,
        /// Query target.
        to: AxialCoord,
    },
    /// A serialized representation was applied to a map of another size.
    ///
    /// Fatal and unrecoverable: resizing a live map is explicitly
    /// unimplemented.
    SizeMismatch {
        /// Size of the live map.
        expected: i32,
        /// Size carried by the representation.
        found: i32,
    },
    /// A coordinate violated the pair-key precondition.
    Coord(CoordError),
    /// The representation document could not be encoded or decoded.
    Json(serde_json::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "map size {size} outside supported range [0, {max}]")
            }
            Self::NotPrecomputed { from, to } => {
                write!(
                    f,
                    "no precomputed entry for pair ({from}, {to}); run precompute_visibility first"
                )
            }
            Self::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "representation size {found} does not match map size {expected}"
                )
            }
            Self::Coord(e) => write!(f, "coordinate error: {e}"),
            Self::Json(e) => write!(f, "representation document error: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coord(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for MapError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
