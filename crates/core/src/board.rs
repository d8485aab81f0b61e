//! Board module - manages the 3x3 puzzle grid
//!
//! The board holds eight numbered tiles and one empty marker in a flat
//! array for cheap copies and comparisons.
//! Coordinates: (row, col) where each ranges 0..2, row-major order.
//! Coordinates are signed at the API boundary so that out-of-range move
//! candidates are representable and rejected by the bounds check.

use tui_slider_types::{Cell, Direction, GRID_SIZE};

/// Total number of cells on the grid
const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// The solved arrangement: 1..8 row-major, empty marker at bottom-right
const GOAL: [Cell; CELL_COUNT] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    None,
];

/// The puzzle board - 3x3 cells using flat array storage
///
/// Invariant: the cells always hold each tile 1..=8 exactly once plus
/// exactly one empty marker. Every constructor starts from [`GOAL`] and
/// every mutation is a swap, so the invariant cannot be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a board in the solved arrangement
    pub fn goal() -> Self {
        Self { cells: GOAL }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Get cell at (row, col)
    ///
    /// Returns `None` if out of bounds; `Some(None)` is the empty marker.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// The cells as rows, for rendering and test assertions
    pub fn rows(&self) -> [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut rows = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (idx, cell) in self.cells.iter().enumerate() {
            rows[idx / GRID_SIZE as usize][idx % GRID_SIZE as usize] = *cell;
        }
        rows
    }

    /// Locate the empty marker (first match in a row-major scan)
    pub fn find_empty(&self) -> (i8, i8) {
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                return (
                    (idx / GRID_SIZE as usize) as i8,
                    (idx % GRID_SIZE as usize) as i8,
                );
            }
        }
        // Every constructor starts from GOAL and every mutation is a swap,
        // so a board without an empty marker is unreachable.
        unreachable!("board has no empty marker")
    }

    /// Move the empty marker one cell in `direction`, sliding the adjacent
    /// tile into the gap
    ///
    /// Returns `true` if the board changed. A candidate position outside
    /// the grid makes the move a no-op and returns `false`.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        let (row, col) = self.find_empty();
        let (dr, dc) = direction.delta();

        match (Self::index(row, col), Self::index(row + dr, col + dc)) {
            (Some(from), Some(to)) => {
                self.cells.swap(from, to);
                true
            }
            _ => false,
        }
    }

    /// Slide the tapped tile into the gap, if it borders the gap
    ///
    /// Translates the tap into the single [`Direction`] that swaps the
    /// tapped tile with the empty marker and delegates to
    /// [`attempt_move`](Self::attempt_move). Taps on the empty marker, on
    /// cells not orthogonally adjacent to it, or outside the grid are
    /// no-ops. Returns the direction that was applied.
    pub fn tap_tile(&mut self, row: i8, col: i8) -> Option<Direction> {
        match self.get(row, col) {
            Some(Some(_)) => {}
            // Out of bounds or the empty marker itself.
            _ => return None,
        }

        let (empty_row, empty_col) = self.find_empty();
        let direction = match (empty_row - row, empty_col - col) {
            // Gap below the tapped tile: the marker moves up a row.
            (1, 0) => Direction::Down,
            (-1, 0) => Direction::Up,
            (0, 1) => Direction::Right,
            (0, -1) => Direction::Left,
            // Diagonal or distant taps do not qualify.
            _ => return None,
        };

        if self.attempt_move(direction) {
            Some(direction)
        } else {
            None
        }
    }

    /// Check whether the board is cell-wise identical to the goal
    pub fn is_solved(&self) -> bool {
        self.cells == GOAL
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}
