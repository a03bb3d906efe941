//! Dense hex grid storage for the hexfield spatial engine.
//!
//! [`HexGrid`] stores one `T` per cell of a hex disk of a given radius,
//! backed by a flat square array with offset addressing. [`CoordCache`] is
//! the shared, mutex-guarded memoization of "all valid coordinates for
//! radius N" — expensive to enumerate, computed once per distinct radius,
//! and handed out as cheap `Arc` slices. The cache is an explicit object
//! passed to whichever layer constructs grids; there is no global
//! singleton.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod grid;

pub use cache::CoordCache;
pub use grid::HexGrid;
