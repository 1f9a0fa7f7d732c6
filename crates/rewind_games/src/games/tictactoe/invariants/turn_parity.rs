//! Turn parity invariant: mark counts on the displayed snapshot match the
//! step pointer.

use super::super::{Game, Player, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: the displayed snapshot at step `k` holds `ceil(k / 2)` X marks
/// and `floor(k / 2)` O marks.
///
/// X moves on even steps, so after `k` moves X has played one more time than
/// O exactly when `k` is odd. Together with [`StepInBounds`](super::StepInBounds)
/// this guarantees the derived turn flag agrees with the board.
pub struct TurnParity;

impl Invariant for TurnParity {
    fn holds(game: &Game) -> bool {
        let (mut x_count, mut o_count) = (0, 0);
        for pos in Position::iter() {
            match game.board().get(pos) {
                Square::Occupied(Player::X) => x_count += 1,
                Square::Occupied(Player::O) => o_count += 1,
                Square::Empty => {}
            }
        }
        let step = game.step();
        x_count == step.div_ceil(2) && o_count == step / 2
    }

    fn description() -> &'static str {
        "Mark counts on the displayed snapshot match step parity"
    }
}
