//! Coordinate algebra for the hexfield spatial engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two interchangeable hex addressing schemes — [`AxialCoord`] and
//! [`CubeCoord`] — along with the hex distance metric, the six neighbour
//! offsets, and [`PairKey`], a bijective packing of two bounded coordinates
//! into a single integer used to memoize pairwise geometric queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axial;
pub mod cube;
pub mod error;
pub mod pair;

pub use axial::{AxialCoord, NEIGHBOUR_OFFSETS};
pub use cube::CubeCoord;
pub use error::CoordError;
pub use pair::{PairKey, PAIR_AXIS_LIMIT};
