//! Step pointer invariant: the pointer always selects a stored snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: history is non-empty and the step pointer indexes into it.
///
/// The initial empty-board entry is never removed, so history length is at
/// least 1 and `step` is at most `history.len() - 1`.
pub struct StepInBounds;

impl Invariant for StepInBounds {
    fn holds(game: &Game) -> bool {
        !game.history().is_empty() && game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer selects an existing history entry"
    }
}
