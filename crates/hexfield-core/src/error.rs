//! Error types for coordinate operations.

use crate::axial::AxialCoord;
use std::fmt;

/// Errors arising from coordinate preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// A coordinate axis exceeds the pair-key magnitude bound.
    ///
    /// Pair keying slots each axis into a fixed decimal width; any axis
    /// with `|value| >= 100` overflows its slot, so construction is
    /// rejected rather than silently miscomputed.
    PairAxisOutOfRange {
        /// The coordinate carrying the offending axis.
        coord: AxialCoord,
        /// The offending axis value.
        value: i32,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PairAxisOutOfRange { coord, value } => {
                write!(
                    f,
                    "coordinate {coord} axis value {value} exceeds the pair-key bound (|v| < 100)"
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
