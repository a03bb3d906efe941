//! Dense per-cell storage over a hex disk.

use hexfield_core::{AxialCoord, NEIGHBOUR_OFFSETS};
use smallvec::SmallVec;

/// Dense storage for all coordinates within a hex radius `size`.
///
/// Each axis is offset by `size` into a flat backing array of side
/// `2*size + 1`. Only coordinates on the hex disk (cube distance from the
/// origin at most `size`) are meaningful; the remaining backing cells
/// exist but are never enumerated by valid-coordinate iteration.
///
/// `get`/`set` are defined for the whole backing square
/// (`|x|, |y| <= size`); access outside it is a programming error and
/// panics rather than returning a recoverable error.
///
/// # Examples
///
/// ```
/// use hexfield_core::AxialCoord;
/// use hexfield_grid::HexGrid;
///
/// let mut grid: HexGrid<u8> = HexGrid::new(2);
/// grid.set(AxialCoord::new(1, -1), 7);
/// assert_eq!(*grid.get(AxialCoord::new(1, -1)), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid<T> {
    size: i32,
    side: usize,
    cells: Vec<T>,
}

impl<T: Default> HexGrid<T> {
    /// Create a grid of radius `size` with every backing cell defaulted.
    ///
    /// # Panics
    ///
    /// Panics if `size` is negative.
    pub fn new(size: i32) -> Self {
        assert!(size >= 0, "grid size must be non-negative, got {size}");
        let side = (2 * size + 1) as usize;
        let mut cells = Vec::with_capacity(side * side);
        cells.resize_with(side * side, T::default);
        Self { size, side, cells }
    }
}

impl<T> HexGrid<T> {
    /// The grid radius.
    pub fn size(&self) -> i32 {
        self.size
    }

    fn index(&self, coord: AxialCoord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} outside grid backing bounds (size {})",
            self.size
        );
        let row = (coord.y + self.size) as usize;
        let col = (coord.x + self.size) as usize;
        row * self.side + col
    }

    /// Whether `coord` lies within the backing square (`|x|, |y| <= size`).
    pub fn contains(&self, coord: AxialCoord) -> bool {
        coord.x.abs() <= self.size && coord.y.abs() <= self.size
    }

    /// Whether `coord` is a legal map cell: its cube form sums to zero
    /// (true by construction for any [`AxialCoord`]) and its cube distance
    /// from the origin does not exceed the radius.
    pub fn is_valid_coord(&self, coord: AxialCoord) -> bool {
        coord.distance(AxialCoord::ORIGIN) <= self.size as u32
    }

    /// The neighbours of `coord` that are valid cells of this grid, in
    /// [`NEIGHBOUR_OFFSETS`] order.
    pub fn valid_neighbours(&self, coord: AxialCoord) -> SmallVec<[AxialCoord; 6]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&off| coord + off)
            .filter(|&nb| self.is_valid_coord(nb))
            .collect()
    }

    /// Read the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the backing bounds.
    pub fn get(&self, coord: AxialCoord) -> &T {
        &self.cells[self.index(coord)]
    }

    /// Mutable access to the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the backing bounds.
    pub fn get_mut(&mut self, coord: AxialCoord) -> &mut T {
        let i = self.index(coord);
        &mut self.cells[i]
    }

    /// Overwrite the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the backing bounds.
    pub fn set(&mut self, coord: AxialCoord, value: T) {
        let i = self.index(coord);
        self.cells[i] = value;
    }

    /// Fill each of `coords` by invoking the factory once per cell.
    ///
    /// The factory runs once per coordinate, so reference-typed payloads
    /// get a fresh instance per cell rather than a shared one.
    pub fn fill_with(&mut self, coords: &[AxialCoord], mut factory: impl FnMut(AxialCoord) -> T) {
        for &coord in coords {
            let i = self.index(coord);
            self.cells[i] = factory(coord);
        }
    }
}

impl<T: Clone> HexGrid<T> {
    /// Reset every backing cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}
