//! Terrain map with area buffs and precomputed line-of-sight.

use crate::error::MapError;
use crate::linedraw::cube_line;
use hexfield_core::{AxialCoord, PairKey, PAIR_AXIS_LIMIT};
use hexfield_grid::{CoordCache, HexGrid};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Terrain occupying a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HexType {
    /// Passable, see-through ground.
    #[default]
    Empty,
    /// Impassable, sight-blocking terrain.
    Wall,
}

impl HexType {
    /// The other terrain kind.
    pub fn toggled(self) -> Self {
        match self {
            Self::Empty => Self::Wall,
            Self::Wall => Self::Empty,
        }
    }
}

/// An area effect anchored to a cell: every cell within `radius` of
/// `center` carries the `effect` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaBuff<B> {
    /// Anchor cell.
    pub center: AxialCoord,
    /// Hex-distance reach of the effect, inclusive.
    pub radius: i32,
    /// Effect payload, opaque to the map.
    pub effect: B,
}

/// A hex terrain map with derived visibility caches.
///
/// Owns the terrain grid, a list of area buffs (generic payload `B`),
/// red/blue starting coordinates, and two caches keyed by [`PairKey`]:
/// visibility and line draw. The caches are empty until
/// [`precompute_visibility`](Map::precompute_visibility) runs and go stale
/// on any terrain change — callers must recompute before querying again
/// (stale lookups still answer, from the pre-mutation terrain; this is a
/// documented hazard, not a guarded one).
///
/// [`snapshot`](Map::snapshot) is the cheap copy: it shares the terrain
/// grid and both caches by reference and clones the buff list. Terrain
/// mutation is copy-on-write, so mutating the original after snapshotting
/// leaves every snapshot's geometry consistent.
#[derive(Debug)]
pub struct Map<B> {
    size: i32,
    coords: Arc<[AxialCoord]>,
    terrain: Arc<HexGrid<HexType>>,
    buffs: Vec<AreaBuff<B>>,
    red_start: Vec<AxialCoord>,
    blue_start: Vec<AxialCoord>,
    visibility: Arc<IndexMap<PairKey, bool>>,
    lines: Arc<IndexMap<PairKey, Vec<AxialCoord>>>,
    empty_coords: Arc<Vec<AxialCoord>>,
}

impl<B> Map<B> {
    /// Create an all-`Empty` map of radius `size`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidSize`] unless `0 <= size < 50`. Pair
    /// keys are collision-free only while every axis magnitude stays
    /// below half the slot width (signed axes span 199 values against a
    /// slot of 100), so the visibility precompute can only claim distinct
    /// keys for every pair by bounding the radius to the half-range.
    pub fn new(size: i32, cache: &CoordCache) -> Result<Self, MapError> {
        if size < 0 || size >= PAIR_AXIS_LIMIT / 2 {
            return Err(MapError::InvalidSize {
                size,
                max: PAIR_AXIS_LIMIT / 2 - 1,
            });
        }
        Ok(Self {
            size,
            coords: cache.coords_within(size),
            terrain: Arc::new(HexGrid::new(size)),
            buffs: Vec::new(),
            red_start: Vec::new(),
            blue_start: Vec::new(),
            visibility: Arc::new(IndexMap::new()),
            lines: Arc::new(IndexMap::new()),
            empty_coords: Arc::new(Vec::new()),
        })
    }

    /// The map radius.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Every valid coordinate of this map, in canonical order.
    pub fn all_coords(&self) -> &[AxialCoord] {
        &self.coords
    }

    /// Whether `coord` is a legal cell of this map.
    pub fn is_valid_coord(&self, coord: AxialCoord) -> bool {
        self.terrain.is_valid_coord(coord)
    }

    /// The terrain at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid backing bounds.
    pub fn terrain(&self, coord: AxialCoord) -> HexType {
        *self.terrain.get(coord)
    }

    /// Overwrite the terrain at `coord`.
    ///
    /// Copy-on-write: if any snapshot still shares the terrain grid, the
    /// grid is cloned before mutation. Derived caches are NOT touched —
    /// recompute before the next visibility query.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid backing bounds.
    pub fn set_terrain(&mut self, coord: AxialCoord, value: HexType) {
        Arc::make_mut(&mut self.terrain).set(coord, value);
    }

    /// Flip the terrain at `coord` between `Empty` and `Wall`.
    pub fn toggle_terrain(&mut self, coord: AxialCoord) {
        let flipped = self.terrain(coord).toggled();
        self.set_terrain(coord, flipped);
    }

    /// Append an area buff.
    pub fn add_buff(&mut self, buff: AreaBuff<B>) {
        self.buffs.push(buff);
    }

    /// Drop every buff. Terrain and derived caches are unaffected.
    pub fn clear_buffs(&mut self) {
        self.buffs.clear();
    }

    /// Effect payloads covering `coord`, in buff-list order.
    ///
    /// Order matters: stacking semantics are owned by the caller.
    pub fn buffs_at(&self, coord: AxialCoord) -> Vec<&B> {
        self.buffs
            .iter()
            .filter(|b| b.center.distance(coord) <= b.radius.max(0) as u32)
            .map(|b| &b.effect)
            .collect()
    }

    /// Red-side starting coordinates.
    pub fn red_start(&self) -> &[AxialCoord] {
        &self.red_start
    }

    /// Blue-side starting coordinates.
    pub fn blue_start(&self) -> &[AxialCoord] {
        &self.blue_start
    }

    /// Append a red-side starting coordinate.
    pub fn add_red_start(&mut self, coord: AxialCoord) {
        self.red_start.push(coord);
    }

    /// Append a blue-side starting coordinate.
    pub fn add_blue_start(&mut self, coord: AxialCoord) {
        self.blue_start.push(coord);
    }

    /// Build the visibility and line-draw tables for the current terrain.
    ///
    /// One O(N²) pass over every ordered coordinate pair: the geometric
    /// line is computed and stored, and visibility is derived as "every
    /// intermediate line cell has `Empty` terrain" — the endpoints
    /// themselves are exempt. Self-pairs store an empty line and are
    /// vacuously visible. The same pass accumulates the list of
    /// `Empty`-terrain coordinates for callers that need it.
    ///
    /// Idempotent while terrain is unchanged; must be re-run after any
    /// terrain mutation.
    pub fn precompute_visibility(&mut self) -> Result<(), MapError> {
        let pair_count = self.coords.len() * self.coords.len();
        let mut visibility = IndexMap::with_capacity(pair_count);
        let mut lines = IndexMap::with_capacity(pair_count);
        let mut empty_coords = Vec::new();

        for &a in self.coords.iter() {
            if self.terrain(a) == HexType::Empty {
                empty_coords.push(a);
            }
            for &b in self.coords.iter() {
                let key = PairKey::new(a, b)?;
                let line = cube_line(a.to_cube(), b.to_cube());
                let visible = self.line_is_clear(&line);
                lines.insert(key, line);
                visibility.insert(key, visible);
            }
        }

        self.visibility = Arc::new(visibility);
        self.lines = Arc::new(lines);
        self.empty_coords = Arc::new(empty_coords);
        Ok(())
    }

    /// Every intermediate cell (endpoints exempt) has `Empty` terrain.
    fn line_is_clear(&self, line: &[AxialCoord]) -> bool {
        line.len() < 3
            || line[1..line.len() - 1]
                .iter()
                .all(|&c| self.terrain(c) == HexType::Empty)
    }

    /// Whether `from` can see `to` unobstructed, per the precomputed table.
    ///
    /// # Errors
    ///
    /// [`MapError::NotPrecomputed`] if the tables were never built (or the
    /// pair is outside the grid); [`MapError::Coord`] if either coordinate
    /// breaks the pair-key bound. A lookup after an un-recomputed terrain
    /// change answers from the stale table.
    pub fn is_visible(&self, from: AxialCoord, to: AxialCoord) -> Result<bool, MapError> {
        let key = PairKey::new(from, to)?;
        self.visibility
            .get(&key)
            .copied()
            .ok_or(MapError::NotPrecomputed { from, to })
    }

    /// The precomputed line from `from` to `to`, endpoints included
    /// (empty for a self-pair).
    ///
    /// # Errors
    ///
    /// Same conditions as [`is_visible`](Map::is_visible).
    pub fn line_between(&self, from: AxialCoord, to: AxialCoord) -> Result<&[AxialCoord], MapError> {
        let key = PairKey::new(from, to)?;
        self.lines
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(MapError::NotPrecomputed { from, to })
    }

    /// Coordinates whose terrain was `Empty` during the last precompute
    /// pass. Empty before the first pass.
    pub fn empty_coords(&self) -> &[AxialCoord] {
        &self.empty_coords
    }

    /// Whether the derived tables are populated.
    pub fn is_precomputed(&self) -> bool {
        !self.visibility.is_empty()
    }
}

impl<B: Clone> Map<B> {
    /// Cheap copy: shares the terrain grid and both derived caches by
    /// reference, clones the buff and starting-position lists.
    ///
    /// Mutating terrain on either copy afterwards triggers copy-on-write,
    /// so the other copy's geometry (and its cache consistency) is
    /// unaffected.
    pub fn snapshot(&self) -> Map<B> {
        Map {
            size: self.size,
            coords: Arc::clone(&self.coords),
            terrain: Arc::clone(&self.terrain),
            buffs: self.buffs.clone(),
            red_start: self.red_start.clone(),
            blue_start: self.blue_start.clone(),
            visibility: Arc::clone(&self.visibility),
            lines: Arc::clone(&self.lines),
            empty_coords: Arc::clone(&self.empty_coords),
        }
    }
}
