mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

pub use game::{Game, GameStatus, JumpError, MoveError};
pub use history::{HistoryEntry, SortOrder, compare_steps};
pub use invariants::{Invariant, SnapshotConsistent, StepInBounds, TurnParity};
pub use position::Position;
pub use rules::{Win, check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
