//! Multi-source breadth-first distance field with path reconstruction.

use crate::error::PathError;
use crate::node::{PathNode, PathState};
use crate::occupancy::{ActorId, MoveHost, OccupancyPolicy};
use hexfield_core::{AxialCoord, NEIGHBOUR_OFFSETS};
use hexfield_grid::{CoordCache, HexGrid};
use hexfield_map::{HexType, Map};
use std::collections::VecDeque;
use std::sync::Arc;

/// Pending-queue length beyond which a search logs a diagnostic.
const QUEUE_WARN_LIMIT: usize = 1000;

/// Predecessor-walk bound during path reconstruction.
const RECONSTRUCT_LIMIT: usize = 1000;

/// A breadth-first shortest-path engine over one map size.
///
/// Owns one [`PathNode`] per grid cell; every call to
/// [`pathfind_from`](Pathfinder::pathfind_from) resets the field and
/// rebuilds it rooted at the given source. Queries
/// ([`distance`](Pathfinder::distance), [`path_to`](Pathfinder::path_to))
/// read the field for the most recent source and are meaningless before
/// the first search.
///
/// # Examples
///
/// ```
/// use hexfield_core::AxialCoord;
/// use hexfield_grid::CoordCache;
/// use hexfield_map::Map;
/// use hexfield_path::{OccupancyPolicy, Pathfinder};
///
/// let cache = CoordCache::new();
/// let map: Map<()> = Map::new(2, &cache).unwrap();
/// let mut finder = Pathfinder::new(2, &cache);
/// finder.pathfind_from(&map, AxialCoord::ORIGIN, OccupancyPolicy::Ignore);
/// assert_eq!(finder.distance(AxialCoord::new(2, -2)), 2);
/// ```
#[derive(Debug)]
pub struct Pathfinder {
    size: i32,
    coords: Arc<[AxialCoord]>,
    nodes: HexGrid<PathNode>,
    source: Option<AxialCoord>,
}

impl Pathfinder {
    /// Create an engine for grids of radius `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is negative.
    pub fn new(size: i32, cache: &CoordCache) -> Self {
        Self {
            size,
            coords: cache.coords_within(size),
            nodes: HexGrid::new(size),
            source: None,
        }
    }

    /// The grid radius this engine operates on.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The source of the most recent search, if any.
    pub fn source(&self) -> Option<AxialCoord> {
        self.source
    }

    /// Every valid coordinate of this engine's grid, in canonical order.
    pub fn all_coords(&self) -> &[AxialCoord] {
        &self.coords
    }

    /// Whether `coord` is a legal cell: cube form sums to zero (true by
    /// construction) and cube distance from the origin is at most the
    /// radius.
    pub fn is_valid_coord(&self, coord: AxialCoord) -> bool {
        self.nodes.is_valid_coord(coord)
    }

    /// Build the distance/predecessor field rooted at `source`.
    ///
    /// Standard FIFO breadth-first search restricted to valid, non-`Wall`
    /// cells, expanding the six neighbour offsets in their fixed order
    /// (deterministic tie resolution). Cells occupied by an actor are
    /// additionally excluded under [`OccupancyPolicy::Exclude`]. A cell
    /// dequeued while already `Closed` is skipped; a neighbour is
    /// (re)enqueued on first discovery or strict distance improvement.
    ///
    /// Termination is bounded by the finite grid. As a defensive measure
    /// the search logs a warning (once per call, without aborting) when
    /// the iteration count exceeds `size² * 10` (floored at one, so a
    /// radius-0 grid searches quietly) or the queue backs up past 1000
    /// entries — either signals an invariant violation elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if the map's size differs from this engine's, or if
    /// `source` is outside the grid backing bounds.
    pub fn pathfind_from<B>(
        &mut self,
        map: &Map<B>,
        source: AxialCoord,
        policy: OccupancyPolicy<'_>,
    ) {
        assert_eq!(
            map.size(),
            self.size,
            "map size does not match pathfinder size"
        );

        self.nodes.fill(PathNode::default());
        self.nodes.set(
            source,
            PathNode {
                predecessor: None,
                state: PathState::Open,
                distance: 0,
                reachable: true,
            },
        );
        self.source = Some(source);

        let iteration_limit = (self.size as u64 * self.size as u64)
            .saturating_mul(10)
            .max(1);
        let mut iterations = 0u64;
        let mut warned_iterations = false;
        let mut warned_queue = false;

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            iterations += 1;
            if !warned_iterations && iterations > iteration_limit {
                log::warn!(
                    "search from {source} exceeded {iteration_limit} iterations; \
                     probable invariant violation in the grid"
                );
                warned_iterations = true;
            }

            let node = *self.nodes.get(current);
            if node.state == PathState::Closed {
                continue;
            }
            self.nodes.get_mut(current).state = PathState::Closed;

            for off in NEIGHBOUR_OFFSETS {
                let next = current + off;
                if !self.is_valid_coord(next) {
                    continue;
                }
                if map.terrain(next) == HexType::Wall {
                    continue;
                }
                if occupancy_blocks(policy, next) {
                    continue;
                }

                let candidate = node.distance + 1;
                let next_node = self.nodes.get_mut(next);
                if next_node.state == PathState::Unvisited || candidate < next_node.distance {
                    next_node.distance = candidate;
                    next_node.predecessor = Some(current);
                    next_node.reachable = true;
                    next_node.state = PathState::Open;
                    queue.push_back(next);
                    if !warned_queue && queue.len() > QUEUE_WARN_LIMIT {
                        log::warn!(
                            "search from {source} queued more than {QUEUE_WARN_LIMIT} \
                             entries; probable invariant violation in the grid"
                        );
                        warned_queue = true;
                    }
                }
            }
        }
    }

    /// Steps from the most recent source to `coord` (`u32::MAX` if
    /// unreached). Meaningless before the first search.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid backing bounds.
    pub fn distance(&self, coord: AxialCoord) -> u32 {
        self.nodes.get(coord).distance
    }

    /// Whether a finite-distance path from the most recent source to
    /// `coord` exists.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid backing bounds.
    pub fn reachable(&self, coord: AxialCoord) -> bool {
        self.nodes.get(coord).reachable
    }

    /// Reconstruct the path to `target`, ordered target first, source
    /// last.
    ///
    /// Walks predecessor links backward from `target` (inclusive) until
    /// the source's zero-distance record. A broken chain — a missing
    /// predecessor before distance zero, or a walk past 1000 cells — is a
    /// probable invariant violation: the partial result is discarded, an
    /// error-severity diagnostic is logged, and an empty path returned.
    /// An unreachable `target` takes the same route (its record has no
    /// predecessor). A `target` with no record at all (outside the
    /// backing grid) yields the singleton `[target]`.
    pub fn path_to(&self, target: AxialCoord) -> Vec<AxialCoord> {
        if !self.nodes.contains(target) {
            return vec![target];
        }

        let mut path = Vec::new();
        let mut current = target;
        for _ in 0..RECONSTRUCT_LIMIT {
            path.push(current);
            let node = self.nodes.get(current);
            if node.distance == 0 {
                return path;
            }
            match node.predecessor {
                Some(prev) => current = prev,
                None => {
                    log::error!(
                        "predecessor chain from {target} broke at {current}; \
                         discarding partial path"
                    );
                    return Vec::new();
                }
            }
        }
        log::error!(
            "predecessor walk from {target} exceeded {RECONSTRUCT_LIMIT} cells; \
             discarding partial path"
        );
        Vec::new()
    }

    /// The coordinate a mover with `budget` movement points reaches along
    /// `path` (ordered target first, source last), walking from the
    /// source end toward the target at one point per step.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyPath`] for an empty path.
    pub fn furthest_point_on_path(
        &self,
        mut budget: u32,
        path: &[AxialCoord],
    ) -> Result<AxialCoord, PathError> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut index = path.len() - 1;
        while budget > 0 && index > 0 {
            index -= 1;
            budget -= 1;
        }
        Ok(path[index])
    }

    /// The coordinate a mover with `budget` movement points reaches when
    /// heading for `target`.
    ///
    /// Reconstructs the path, strips the target cell itself (not a legal
    /// stopping point), and delegates to
    /// [`furthest_point_on_path`](Pathfinder::furthest_point_on_path).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TargetTooClose`] when the path has at most
    /// one cell — the target is the source itself or unreachable.
    pub fn furthest_point_to_target(
        &self,
        budget: u32,
        target: AxialCoord,
    ) -> Result<AxialCoord, PathError> {
        let path = self.path_to(target);
        if path.len() <= 1 {
            return Err(PathError::TargetTooClose { target });
        }
        self.furthest_point_on_path(budget, &path[1..])
    }

    /// Advance `actor` along `path` (ordered target first, source last,
    /// including the actor's current cell) one step at a time while the
    /// host reports budget remaining and steps remain, applying each step
    /// through the host.
    ///
    /// Returns the final cell the actor stands on, or `None` if the path
    /// was empty.
    pub fn move_as_far_as_possible(
        &self,
        host: &mut dyn MoveHost,
        actor: ActorId,
        mut path: Vec<AxialCoord>,
    ) -> Option<AxialCoord> {
        // Trailing element is the cell the actor already occupies.
        let mut position = path.pop();
        while host.moves_left(actor) > 0 {
            match path.pop() {
                Some(next) => {
                    host.apply_move(actor, next);
                    position = Some(next);
                }
                None => break,
            }
        }
        position
    }
}

fn occupancy_blocks(policy: OccupancyPolicy<'_>, coord: AxialCoord) -> bool {
    match policy {
        OccupancyPolicy::Ignore => false,
        OccupancyPolicy::Exclude { view, except } => match view.occupant(coord) {
            Some(actor) => Some(actor) != except,
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::OccupancyView;
    use std::collections::HashMap;

    fn c(x: i32, y: i32) -> AxialCoord {
        AxialCoord::new(x, y)
    }

    fn searched(size: i32, walls: &[AxialCoord], source: AxialCoord) -> Pathfinder {
        let cache = CoordCache::new();
        let mut map: Map<()> = Map::new(size, &cache).unwrap();
        for &w in walls {
            map.set_terrain(w, HexType::Wall);
        }
        let mut finder = Pathfinder::new(size, &cache);
        finder.pathfind_from(&map, source, OccupancyPolicy::Ignore);
        finder
    }

    #[test]
    fn source_record_is_forced() {
        let finder = searched(2, &[], c(0, 0));
        assert_eq!(finder.distance(c(0, 0)), 0);
        assert!(finder.reachable(c(0, 0)));
        assert_eq!(finder.source(), Some(c(0, 0)));
    }

    #[test]
    fn all_coords_enumerates_the_disk() {
        let cache = CoordCache::new();
        let finder = Pathfinder::new(2, &cache);
        assert_eq!(finder.all_coords().len(), 19);
        assert_eq!(finder.all_coords(), &*cache.coords_within(2));
    }

    #[test]
    fn radius_zero_grid_searches_cleanly() {
        let finder = searched(0, &[], c(0, 0));
        assert_eq!(finder.all_coords(), &[c(0, 0)]);
        assert_eq!(finder.distance(c(0, 0)), 0);
        assert!(finder.reachable(c(0, 0)));
        assert_eq!(finder.path_to(c(0, 0)), vec![c(0, 0)]);
    }

    #[test]
    fn wall_free_distances_match_the_hex_metric() {
        let finder = searched(3, &[], c(0, 0));
        for &coord in finder.all_coords() {
            assert_eq!(
                finder.distance(coord),
                coord.distance(AxialCoord::ORIGIN),
                "at {coord}"
            );
        }
    }

    #[test]
    fn off_centre_source_distances_match_the_hex_metric() {
        let source = c(-2, 1);
        let finder = searched(3, &[], source);
        for &coord in finder.all_coords() {
            assert_eq!(finder.distance(coord), coord.distance(source), "at {coord}");
        }
    }

    #[test]
    fn walls_are_never_entered() {
        let wall = c(1, 0);
        let finder = searched(2, &[wall], c(0, 0));
        assert!(!finder.reachable(wall));
        assert_eq!(finder.distance(wall), u32::MAX);
    }

    #[test]
    fn walls_force_detours() {
        // Ring of walls with one gap around the source's east side.
        let finder = searched(2, &[c(1, -1), c(1, 0)], c(0, 0));
        // (2, -1) sits behind the wall pair; the detour goes around.
        assert!(finder.reachable(c(2, -1)));
        assert!(finder.distance(c(2, -1)) > c(0, 0).distance(c(2, -1)));
    }

    #[test]
    fn repeated_searches_reset_the_field() {
        let cache = CoordCache::new();
        let map: Map<()> = Map::new(2, &cache).unwrap();
        let mut finder = Pathfinder::new(2, &cache);

        finder.pathfind_from(&map, c(2, 0), OccupancyPolicy::Ignore);
        assert_eq!(finder.distance(c(2, 0)), 0);

        finder.pathfind_from(&map, c(-2, 0), OccupancyPolicy::Ignore);
        assert_eq!(finder.distance(c(-2, 0)), 0);
        assert_eq!(finder.distance(c(2, 0)), 4);
    }

    #[test]
    fn path_reconstruction_is_consistent() {
        let finder = searched(3, &[c(0, 1), c(1, 0)], c(0, 0));
        for &coord in finder.all_coords() {
            if !finder.reachable(coord) {
                continue;
            }
            let path = finder.path_to(coord);
            assert_eq!(*path.first().unwrap(), coord);
            assert_eq!(*path.last().unwrap(), c(0, 0));
            assert_eq!(path.len() as u32, finder.distance(coord) + 1);
            for pair in path.windows(2) {
                assert_eq!(pair[0].distance(pair[1]), 1);
            }
        }
    }

    #[test]
    fn unreachable_target_yields_an_empty_path() {
        let wall = c(1, 0);
        let finder = searched(2, &[wall], c(0, 0));
        assert!(finder.path_to(wall).is_empty());
    }

    #[test]
    fn target_without_a_record_yields_a_singleton() {
        let finder = searched(1, &[], c(0, 0));
        let outside = c(5, 5);
        assert_eq!(finder.path_to(outside), vec![outside]);
    }

    #[test]
    fn furthest_point_walks_the_budget_from_the_source_end() {
        let finder = searched(3, &[], c(0, 0));
        let path = finder.path_to(c(3, 0));
        assert_eq!(path.len(), 4);

        assert_eq!(finder.furthest_point_on_path(0, &path).unwrap(), c(0, 0));
        assert_eq!(finder.furthest_point_on_path(2, &path).unwrap(), c(2, 0));
        // Budget beyond the path length saturates at the target end.
        assert_eq!(finder.furthest_point_on_path(9, &path).unwrap(), c(3, 0));
    }

    #[test]
    fn furthest_point_rejects_an_empty_path() {
        let finder = searched(1, &[], c(0, 0));
        assert_eq!(
            finder.furthest_point_on_path(3, &[]),
            Err(PathError::EmptyPath)
        );
    }

    #[test]
    fn furthest_point_to_target_never_stops_on_the_target() {
        let finder = searched(3, &[], c(0, 0));
        assert_eq!(
            finder.furthest_point_to_target(9, c(3, 0)).unwrap(),
            c(2, 0)
        );
        assert_eq!(
            finder.furthest_point_to_target(1, c(3, 0)).unwrap(),
            c(1, 0)
        );
    }

    #[test]
    fn furthest_point_to_the_source_itself_is_rejected() {
        let finder = searched(2, &[], c(0, 0));
        assert_eq!(
            finder.furthest_point_to_target(3, c(0, 0)),
            Err(PathError::TargetTooClose { target: c(0, 0) })
        );
    }

    #[test]
    fn furthest_point_to_an_unreachable_target_is_rejected() {
        let wall = c(1, 0);
        let finder = searched(2, &[wall], c(0, 0));
        assert_eq!(
            finder.furthest_point_to_target(3, wall),
            Err(PathError::TargetTooClose { target: wall })
        );
    }

    // ── Occupancy policies ──────────────────────────────────────

    struct FixedOccupancy(HashMap<AxialCoord, ActorId>);

    impl OccupancyView for FixedOccupancy {
        fn occupant(&self, coord: AxialCoord) -> Option<ActorId> {
            self.0.get(&coord).copied()
        }
    }

    fn ring_of_actors() -> FixedOccupancy {
        let mut cells = HashMap::new();
        for (i, off) in NEIGHBOUR_OFFSETS.iter().enumerate() {
            cells.insert(*off, ActorId(i as u64));
        }
        FixedOccupancy(cells)
    }

    #[test]
    fn ignore_policy_searches_through_actors() {
        let cache = CoordCache::new();
        let map: Map<()> = Map::new(2, &cache).unwrap();
        let mut finder = Pathfinder::new(2, &cache);

        // Legacy behaviour: actors ringing the source are invisible to
        // the search under Ignore.
        finder.pathfind_from(&map, c(0, 0), OccupancyPolicy::Ignore);
        assert!(finder.reachable(c(2, 0)));
        assert_eq!(finder.distance(c(2, 0)), 2);
    }

    #[test]
    fn exclude_policy_blocks_occupied_cells() {
        let cache = CoordCache::new();
        let map: Map<()> = Map::new(2, &cache).unwrap();
        let occupancy = ring_of_actors();
        let mut finder = Pathfinder::new(2, &cache);

        finder.pathfind_from(
            &map,
            c(0, 0),
            OccupancyPolicy::Exclude {
                view: &occupancy,
                except: None,
            },
        );
        // Fully ringed in: nothing beyond the source is reachable.
        for &coord in finder.all_coords() {
            assert_eq!(finder.reachable(coord), coord == c(0, 0), "at {coord}");
        }
    }

    #[test]
    fn exclude_policy_spares_the_excepted_actor() {
        let cache = CoordCache::new();
        let map: Map<()> = Map::new(2, &cache).unwrap();
        let mut cells = HashMap::new();
        cells.insert(c(1, 0), ActorId(42));
        let occupancy = FixedOccupancy(cells);
        let mut finder = Pathfinder::new(2, &cache);

        finder.pathfind_from(
            &map,
            c(0, 0),
            OccupancyPolicy::Exclude {
                view: &occupancy,
                except: Some(ActorId(42)),
            },
        );
        assert!(finder.reachable(c(1, 0)));
        assert_eq!(finder.distance(c(2, 0)), 2);
    }

    // ── Movement application ────────────────────────────────────

    struct BudgetHost {
        budget: u32,
        moves: Vec<AxialCoord>,
    }

    impl MoveHost for BudgetHost {
        fn moves_left(&self, _actor: ActorId) -> u32 {
            self.budget
        }

        fn apply_move(&mut self, _actor: ActorId, dest: AxialCoord) {
            self.budget -= 1;
            self.moves.push(dest);
        }
    }

    #[test]
    fn move_as_far_as_possible_spends_the_budget_along_the_path() {
        let finder = searched(3, &[], c(0, 0));
        let path = finder.path_to(c(3, 0));
        let mut host = BudgetHost {
            budget: 2,
            moves: Vec::new(),
        };

        let end = finder.move_as_far_as_possible(&mut host, ActorId(1), path);
        assert_eq!(end, Some(c(2, 0)));
        assert_eq!(host.moves, vec![c(1, 0), c(2, 0)]);
        assert_eq!(host.budget, 0);
    }

    #[test]
    fn move_as_far_as_possible_stops_at_the_path_end() {
        let finder = searched(2, &[], c(0, 0));
        let path = finder.path_to(c(1, 0));
        let mut host = BudgetHost {
            budget: 5,
            moves: Vec::new(),
        };

        let end = finder.move_as_far_as_possible(&mut host, ActorId(1), path);
        assert_eq!(end, Some(c(1, 0)));
        assert_eq!(host.moves, vec![c(1, 0)]);
        assert_eq!(host.budget, 4);
    }

    #[test]
    fn move_as_far_as_possible_with_an_empty_path_does_nothing() {
        let finder = searched(1, &[], c(0, 0));
        let mut host = BudgetHost {
            budget: 3,
            moves: Vec::new(),
        };
        let end = finder.move_as_far_as_possible(&mut host, ActorId(1), Vec::new());
        assert_eq!(end, None);
        assert!(host.moves.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn any_wall_free_search_matches_the_hex_metric(index in 0usize..37) {
            let cache = CoordCache::new();
            let source = cache.coords_within(3)[index];
            let finder = searched(3, &[], source);
            for &coord in finder.all_coords() {
                proptest::prop_assert_eq!(finder.distance(coord), coord.distance(source));
            }
        }
    }
}
