//! Per-cell search records.

use hexfield_core::AxialCoord;

/// Search lifecycle of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathState {
    /// Never touched by the current search.
    #[default]
    Unvisited,
    /// Discovered and queued for expansion.
    Open,
    /// Expanded; skipped if dequeued again.
    Closed,
}

/// One cell's pathfinding record.
///
/// Reset to `{None, Unvisited, u32::MAX, false}` at the start of every
/// search; the source cell is then force-set to
/// `{None, Open, 0, true}` before the queue starts draining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// The cell this one was reached from, `None` for the source (and for
    /// unreached cells).
    pub predecessor: Option<AxialCoord>,
    /// Search lifecycle state.
    pub state: PathState,
    /// Steps from the source; `u32::MAX` until discovered.
    pub distance: u32,
    /// Whether a finite-distance path from the source exists.
    pub reachable: bool,
}

impl Default for PathNode {
    fn default() -> Self {
        Self {
            predecessor: None,
            state: PathState::Unvisited,
            distance: u32::MAX,
            reachable: false,
        }
    }
}
