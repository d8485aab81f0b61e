//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the entire puzzle state machine. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical shuffles (for tests)
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid with the move engine and win check
//! - [`game`]: session owning the board, shuffler, and solved latch
//! - [`rng`]: seeded LCG for uniform random direction draws
//!
//! # Game Rules
//!
//! - The empty marker moves in the pressed direction; the adjacent tile
//!   slides into the gap. Out-of-bounds moves are no-ops.
//! - Tapping a tile orthogonally adjacent to the gap slides it into the
//!   gap; any other tap is a no-op.
//! - A new game replays 1000 random legal moves from the solved board, so
//!   every shuffled board is reachable and therefore solvable.
//! - After every board change the session compares against the goal and
//!   emits a one-shot solved event on the first match.
//!
//! # Example
//!
//! ```
//! use tui_slider_core::GameSession;
//! use tui_slider_types::{Direction, GameAction};
//!
//! // Create and shuffle a game.
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! // Apply moves; illegal ones are no-ops.
//! game.apply_action(GameAction::Move(Direction::Up));
//! game.apply_action(GameAction::Tap { row: 0, col: 0 });
//!
//! // The invariant holds: one gap, tiles 1..=8 once each.
//! let snapshot = game.snapshot();
//! let empties = snapshot.board.iter().flatten().filter(|c| c.is_none()).count();
//! assert_eq!(empties, 1);
//! ```

pub mod board;
pub mod game;
pub mod rng;

pub use tui_slider_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{GameEvent, GameSession, GameSnapshot};
pub use rng::SimpleRng;
