//! Game session module - owns the board, the shuffler, and the solved latch
//!
//! The session is the single piece of mutable state in the program. It
//! applies actions to the board and re-evaluates the win condition
//! immediately after every mutating call (check-after-mutate, never
//! interleaved), emitting [`GameEvent::Solved`] exactly once per game.

use tui_slider_types::{Cell, GameAction, GRID_SIZE, SHUFFLE_MOVES};

use crate::board::Board;
use crate::rng::SimpleRng;

/// One-shot events emitted by the session for the UI to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The board just reached the goal arrangement for the first time
    /// this game
    Solved,
}

/// Complete game state: board plus the latched solved flag
///
/// Fields are public so tests can set up exact board states.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    /// Latches on the first solve; further moves never re-emit the event
    /// and the game never resets itself (only [`GameAction::NewGame`]
    /// starts over).
    pub solved: bool,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session on the goal board, not yet shuffled
    ///
    /// The same seed reproduces the same shuffles.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::goal(),
            solved: false,
            rng: SimpleRng::new(seed),
        }
    }

    /// Shuffle and run the initial win check
    ///
    /// The event is `Some(Solved)` only in the astronomically unlikely
    /// case that all random moves round-trip exactly.
    pub fn start(&mut self) -> Option<GameEvent> {
        self.shuffle();
        self.check_solved()
    }

    /// Randomize the board by replaying random legal moves
    ///
    /// Applies exactly [`SHUFFLE_MOVES`] attempted moves with uniformly
    /// drawn directions; out-of-bounds draws are silent no-ops and still
    /// count. Every applied move is a legal puzzle transformation, so the
    /// result is always solvable. The board is observable only after all
    /// steps have run (this method takes `&mut self` and loops to
    /// completion synchronously).
    pub fn shuffle(&mut self) {
        for _ in 0..SHUFFLE_MOVES {
            let direction = self.rng.direction();
            self.board.attempt_move(direction);
        }
    }

    /// Apply one action and report any resulting event
    ///
    /// Illegal moves and non-qualifying taps are no-ops, not errors. The
    /// win check runs only when the board actually changed.
    pub fn apply_action(&mut self, action: GameAction) -> Option<GameEvent> {
        let changed = match action {
            GameAction::Move(direction) => self.board.attempt_move(direction),
            GameAction::Tap { row, col } => self.board.tap_tile(row, col).is_some(),
            GameAction::NewGame => {
                self.restart();
                return self.check_solved();
            }
            // Presentation concern; the caller owns the theme.
            GameAction::CycleTheme => false,
        };

        if changed {
            self.check_solved()
        } else {
            None
        }
    }

    /// Discard the current game and shuffle a fresh board
    pub fn restart(&mut self) {
        self.board = Board::goal();
        self.solved = false;
        self.shuffle();
    }

    /// Win check, run immediately after any mutating call
    fn check_solved(&mut self) -> Option<GameEvent> {
        if self.board.is_solved() && !self.solved {
            self.solved = true;
            return Some(GameEvent::Solved);
        }
        None
    }

    /// Capture the render-facing state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            solved: self.solved,
        }
    }
}

/// Render-facing copy of the game state
///
/// Plain data so the view layer never touches live game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Cell contents as rows; `None` is the empty marker
    pub board: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_slider_types::Direction;

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = GameSession::new(12345);
        let mut b = GameSession::new(12345);
        a.start();
        b.start();
        assert_eq!(a.board, b.board);

        let mut c = GameSession::new(54321);
        c.start();
        // Not guaranteed in principle, but a collision here means the
        // seeding is broken in practice.
        assert_ne!(a.board, c.board);
    }

    #[test]
    fn solved_event_is_one_shot() {
        let mut session = GameSession::new(1);
        // One legal move away from the goal: gap at (2,1), 8 at (2,2).
        session.board.attempt_move(Direction::Right);
        assert!(!session.board.is_solved());

        let event = session.apply_action(GameAction::Move(Direction::Left));
        assert_eq!(event, Some(GameEvent::Solved));
        assert!(session.solved);

        // Move away and back: still no second event.
        assert_eq!(session.apply_action(GameAction::Move(Direction::Right)), None);
        assert_eq!(session.apply_action(GameAction::Move(Direction::Left)), None);
        assert!(session.board.is_solved());
        assert!(session.solved);
    }

    #[test]
    fn no_op_actions_skip_the_win_check() {
        let mut session = GameSession::new(1);
        // Goal board: gap at bottom-right, Up and Left are out of bounds.
        assert_eq!(session.apply_action(GameAction::Move(Direction::Up)), None);
        assert_eq!(session.apply_action(GameAction::Move(Direction::Left)), None);
        // The board never changed, so the latch never fired even though
        // the board is the goal.
        assert!(!session.solved);
    }

    #[test]
    fn new_game_resets_the_latch() {
        let mut session = GameSession::new(9);
        session.board.attempt_move(Direction::Right);
        assert_eq!(
            session.apply_action(GameAction::Move(Direction::Left)),
            Some(GameEvent::Solved)
        );

        assert_eq!(session.apply_action(GameAction::NewGame), None);
        assert!(!session.solved);
    }
}
