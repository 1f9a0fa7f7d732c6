//! Snapshot consistency invariant: each history entry extends its
//! predecessor by exactly the recorded move.

use super::super::{Game, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: entry `k` differs from entry `k - 1` in exactly one square,
/// the one named by its recorded move, and carries `k` occupied squares.
///
/// Entry 0 must be the empty board with no recorded move.
pub struct SnapshotConsistent;

impl Invariant for SnapshotConsistent {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.moved().is_some() || first.board().occupied_count() != 0 {
            return false;
        }

        for (k, pair) in history.windows(2).enumerate() {
            let (prev, entry) = (&pair[0], &pair[1]);
            if *entry.step() != k + 1 || entry.board().occupied_count() != k + 1 {
                return false;
            }
            let Some(moved) = entry.moved() else {
                return false;
            };
            let extends = Position::iter().all(|pos| {
                if pos == *moved {
                    prev.board().is_empty(pos) && entry.board().get(pos) != Square::Empty
                } else {
                    prev.board().get(pos) == entry.board().get(pos)
                }
            });
            if !extends {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly the recorded move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(SnapshotConsistent::holds(&Game::new()));
    }

    #[test]
    fn test_holds_through_full_game() {
        let mut game = Game::new();
        // Draw sequence: no winner, board fills up.
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(Position::from_index(i).unwrap()).unwrap();
            assert!(SnapshotConsistent::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_rewind_and_replay() {
        let mut game = Game::new();
        for i in [0, 3, 1, 4] {
            game.play(Position::from_index(i).unwrap()).unwrap();
        }
        game.jump_to(2).unwrap();
        game.play(Position::BottomRight).unwrap();
        assert!(SnapshotConsistent::holds(&game));
    }
}
