//! Collaborator interfaces: occupancy lookup and movement application.

use hexfield_core::AxialCoord;

/// Opaque identifier of an actor occupying map cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

/// Read-only occupancy: which actor, if any, stands on a cell.
pub trait OccupancyView {
    /// The actor occupying `coord`, if any.
    fn occupant(&self, coord: AxialCoord) -> Option<ActorId>;
}

/// Applies movement decided by the pathfinder, one step at a time.
///
/// The host owns actor bookkeeping (position, remaining budget); the
/// pathfinder only drives it.
pub trait MoveHost {
    /// Remaining movement budget of `actor`.
    fn moves_left(&self, actor: ActorId) -> u32;

    /// Move `actor` to the adjacent cell `dest`, spending budget as the
    /// host sees fit.
    fn apply_move(&mut self, actor: ActorId, dest: AxialCoord);
}

/// Whether a search treats occupied cells as blocked.
///
/// The historical engine behaviour is [`OccupancyPolicy::Ignore`]: a
/// short-circuited condition left actor blocking permanently disabled, so
/// every cell searched as unoccupied. That behaviour is kept reachable —
/// callers opt into exclusion explicitly rather than the engine silently
/// "fixing" it.
#[derive(Clone, Copy)]
pub enum OccupancyPolicy<'a> {
    /// Treat every cell as unoccupied (the legacy default).
    Ignore,
    /// Skip cells occupied by any actor other than `except` (typically
    /// the actor the search is rooted at).
    Exclude {
        /// Occupancy source.
        view: &'a dyn OccupancyView,
        /// Actor whose own cell is never treated as blocked.
        except: Option<ActorId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedOccupancy(HashMap<AxialCoord, ActorId>);

    impl OccupancyView for FixedOccupancy {
        fn occupant(&self, coord: AxialCoord) -> Option<ActorId> {
            self.0.get(&coord).copied()
        }
    }

    #[test]
    fn view_reports_occupants() {
        let mut cells = HashMap::new();
        cells.insert(AxialCoord::new(1, 0), ActorId(7));
        let view = FixedOccupancy(cells);
        assert_eq!(view.occupant(AxialCoord::new(1, 0)), Some(ActorId(7)));
        assert_eq!(view.occupant(AxialCoord::new(0, 0)), None);
    }
}
