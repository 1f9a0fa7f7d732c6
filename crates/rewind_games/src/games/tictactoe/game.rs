//! Game engine: move application, time-travel, and status reporting.

use super::history::{HistoryEntry, SortOrder, compare_steps};
use super::position::Position;
use super::rules::{Win, check_winner, is_full};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Errors that can occur when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step is outside the stored history.
    #[display("Step {} out of bounds (history has {} entries)", step, len)]
    StepOutOfBounds {
        /// The requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

/// Current status of the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// The player to move next.
        next: Player,
    },
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

/// Tic-tac-toe game with full history and a step pointer.
///
/// The board is never stored on its own: every state the game has passed
/// through lives in `history`, and `step` selects the snapshot currently
/// displayed. Whose turn it is falls out of step parity (even = X), so a
/// jump can never leave the turn flag stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Snapshots in move order. Always holds at least the initial entry.
    history: Vec<HistoryEntry>,
    /// Index into `history` of the displayed snapshot.
    step: usize,
    /// Display order for the move list.
    sort: SortOrder,
}

impl Game {
    /// Creates a new game with the initial empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            sort: SortOrder::default(),
        }
    }

    /// Returns the full history, including entries past the current step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns the currently displayed board snapshot.
    pub fn board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Returns the player to move at the current step.
    ///
    /// Derived from step parity: X moves on even steps.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner of the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.board())
    }

    /// Returns the status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Returns true if the displayed snapshot ends the game.
    pub fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::InProgress { .. })
    }

    /// Applies a move at the given position for the player whose turn it is.
    ///
    /// This is the only mutation path for the board. Any entries after the
    /// current step are discarded first, so playing from a rewound state
    /// rewrites the future; mere navigation never does.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed snapshot has a winner.
    /// - [`MoveError::SquareOccupied`] if the target square is taken.
    ///
    /// Both leave history and step pointer untouched.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = self.board();

        if check_winner(current).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut board = current.clone();
        board.set(pos, Square::Occupied(player));

        self.history.truncate(self.step + 1);
        self.step = self.history.len();
        self.history.push(HistoryEntry::new(self.step, board, pos));

        debug!(step = self.step, %pos, "Move applied");
        Ok(())
    }

    /// Jumps the step pointer to the given history index.
    ///
    /// Navigation only: history contents are untouched, so jumping forward
    /// again is always possible until a new move is played.
    ///
    /// # Errors
    ///
    /// [`JumpError::StepOutOfBounds`] if `step` exceeds the stored history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfBounds {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(step, next = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Flips the move-list display order.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
    }

    /// Returns history entries in display order.
    ///
    /// Underlying history order and step indices are never altered; this is
    /// a view sorted by [`compare_steps`] under the current direction flag.
    pub fn sorted_moves(&self) -> Vec<&HistoryEntry> {
        let mut entries: Vec<&HistoryEntry> = self.history.iter().collect();
        entries.sort_by(|a, b| compare_steps(*a.step(), *b.step(), self.sort));
        entries
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
