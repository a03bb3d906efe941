//! Breadth-first shortest-path engine over hexfield maps.
//!
//! [`Pathfinder`] builds a distance/predecessor field rooted at a chosen
//! source coordinate, then answers distance queries, reconstructs paths,
//! and truncates them against a movement budget. Occupancy exclusion is an
//! explicit search parameter ([`OccupancyPolicy`]); movement application
//! goes through the [`MoveHost`] collaborator so the engine stays free of
//! actor bookkeeping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod node;
pub mod occupancy;
pub mod pathfinder;

pub use error::PathError;
pub use node::{PathNode, PathState};
pub use occupancy::{ActorId, MoveHost, OccupancyPolicy, OccupancyView};
pub use pathfinder::Pathfinder;
