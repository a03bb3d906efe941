//! Error types for path queries.

use hexfield_core::AxialCoord;
use std::fmt;

/// Invalid-state conditions in path post-processing.
///
/// These signal programming errors in the orchestration layer (asking for
/// a stopping point on a path that cannot have one), distinct from the
/// fail-fast precondition panics and from the logged best-effort
/// degradations inside the search itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A furthest-point query ran against an empty path.
    EmptyPath,
    /// The target is the source itself or unreachable — its path has no
    /// legal stopping point.
    TargetTooClose {
        /// The offending target.
        target: AxialCoord,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "furthest-point query on an empty path"),
            Self::TargetTooClose { target } => {
                write!(f, "path to {target} has no legal stopping point")
            }
        }
    }
}

impl std::error::Error for PathError {}
