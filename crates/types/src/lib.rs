//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Grid Dimensions
//!
//! Classic 8-puzzle dimensions:
//!
//! - **Grid**: 3x3 cells (rows and columns indexed 0-2)
//! - **Tiles**: identifiers 1-8, each appearing exactly once
//! - **Empty marker**: exactly one cell holds no tile
//!
//! # Direction Semantics
//!
//! A [`Direction`] describes the movement of the *empty marker*, not the
//! tile. "Up" pulls the tile below the gap upward, which means the empty
//! marker's row index *increases*. The full delta mapping:
//!
//! | Direction | Empty marker delta (row, col) |
//! |-----------|-------------------------------|
//! | `Up`      | (+1, 0) |
//! | `Down`    | (-1, 0) |
//! | `Left`    | (0, +1) |
//! | `Right`   | (0, -1) |
//!
//! This mapping matches how the controls read on screen: pressing Up makes
//! a tile slide up into the gap.
//!
//! # Examples
//!
//! ```
//! use tui_slider_types::{Direction, GameAction, GRID_SIZE, SHUFFLE_MOVES};
//!
//! // Direction deltas move the empty marker.
//! assert_eq!(Direction::Up.delta(), (1, 0));
//! assert_eq!(Direction::Right.delta(), (0, -1));
//!
//! // Every direction has an inverse.
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Parse from string (case-insensitive).
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//!
//! // Grid constants.
//! assert_eq!(GRID_SIZE, 3);
//! assert_eq!(SHUFFLE_MOVES, 1000);
//!
//! // Actions wrap directions plus the non-movement controls.
//! let action = GameAction::Move(Direction::Down);
//! assert_ne!(action, GameAction::NewGame);
//! ```

/// Grid side length in cells (3x3)
pub const GRID_SIZE: u8 = 3;

/// Number of numbered tiles (1..=8)
pub const TILE_COUNT: u8 = 8;

/// Number of random moves applied when shuffling a new game
///
/// Illegal draws are no-ops but still count toward this total, so a shuffle
/// always performs exactly this many attempted moves.
pub const SHUFFLE_MOVES: u32 = 1000;

/// A numbered tile identifier (1..=8)
pub type Tile = u8;

/// A cell on the puzzle grid
///
/// - `None`: the empty marker
/// - `Some(tile)`: cell holding the given tile
///
/// Used by the board as a flat array of cells.
pub type Cell = Option<Tile>;

/// Movement direction of the empty marker
///
/// See the module docs for the delta mapping; note that "Up" *increases*
/// the empty marker's row index (the tile below slides up into the gap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order used for uniform random draws
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta applied to the empty marker's position
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_slider_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (1, 0));
    /// assert_eq!(Direction::Down.delta(), (-1, 0));
    /// assert_eq!(Direction::Left.delta(), (0, 1));
    /// assert_eq!(Direction::Right.delta(), (0, -1));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// The inverse direction (applying both restores the board)
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_slider_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input layer (keys) and by view hit-testing (mouse taps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide a tile by moving the empty marker in the given direction
    Move(Direction),
    /// Tap the cell at (row, col); slides that tile if it borders the gap
    Tap { row: i8, col: i8 },
    /// Shuffle a fresh board
    NewGame,
    /// Cycle the presentation theme
    CycleTheme,
}
