//! Rewind Games library - tic-tac-toe with move history and time-travel
//!
//! The game is modeled as an append-only history of board snapshots plus a
//! step pointer selecting the currently displayed snapshot. Jumping the
//! pointer backward never discards history; only a *new* move played from an
//! earlier step truncates the future.
//!
//! # Example
//!
//! ```
//! use rewind_games::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft)?;
//! game.play(Position::Center)?;
//! assert_eq!(game.next_player(), Player::X);
//!
//! // Rewind to the start without losing either move.
//! game.jump_to(0)?;
//! assert_eq!(game.history().len(), 3);
//! assert!(matches!(game.status(), GameStatus::InProgress { next: Player::X }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, HistoryEntry, JumpError, MoveError, Player, Position, SortOrder,
    Square, Win,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{
    Invariant, SnapshotConsistent, StepInBounds, TurnParity, check_winner, compare_steps, is_draw,
    is_full,
};
