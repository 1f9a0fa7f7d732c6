//! Move history: immutable board snapshots and their display order.

use super::position::Position;
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry in the game history: a board snapshot plus the move that
/// produced it. Immutable once created.
///
/// Entry 0 is the initial empty board and carries no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Sequence index of this entry (0 = game start).
    step: usize,
    /// Board snapshot after the move was applied.
    board: Board,
    /// The move that produced this snapshot, if any.
    moved: Option<Position>,
}

impl HistoryEntry {
    /// Creates the initial entry: empty board, no move.
    pub fn initial() -> Self {
        Self {
            step: 0,
            board: Board::new(),
            moved: None,
        }
    }

    /// Creates an entry for the given step and snapshot.
    pub fn new(step: usize, board: Board, moved: Position) -> Self {
        Self {
            step,
            board,
            moved: Some(moved),
        }
    }

    /// Returns the display label for this entry in the move list.
    ///
    /// Move coordinates are reported 1-based as `(row,col)`.
    pub fn description(&self) -> String {
        match self.moved {
            None => "Go to game start".to_string(),
            Some(pos) => format!("Go to move #{} ({},{})", self.step, pos.row(), pos.col()),
        }
    }
}

/// Display order of the move list.
///
/// Affects rendering only; underlying history order and step indices are
/// never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Returns the display label for the sort toggle.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Asc",
            SortOrder::Descending => "Desc",
        }
    }
}

/// Compares two step indices under the given display order.
///
/// An explicit comparator over both indices and the direction flag, so the
/// ordering rule carries no hidden state.
pub fn compare_steps(a: usize, b: usize, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.cmp(&b),
        SortOrder::Descending => b.cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entry_label() {
        let entry = HistoryEntry::initial();
        assert_eq!(entry.description(), "Go to game start");
        assert_eq!(*entry.step(), 0);
        assert!(entry.moved().is_none());
    }

    #[test]
    fn test_move_entry_label_uses_one_based_coords() {
        let entry = HistoryEntry::new(3, Board::new(), Position::BottomCenter);
        assert_eq!(entry.description(), "Go to move #3 (3,2)");
    }

    #[test]
    fn test_compare_steps_ascending() {
        assert_eq!(compare_steps(1, 2, SortOrder::Ascending), Ordering::Less);
        assert_eq!(compare_steps(2, 1, SortOrder::Ascending), Ordering::Greater);
        assert_eq!(compare_steps(2, 2, SortOrder::Ascending), Ordering::Equal);
    }

    #[test]
    fn test_compare_steps_descending() {
        assert_eq!(compare_steps(1, 2, SortOrder::Descending), Ordering::Greater);
        assert_eq!(compare_steps(2, 1, SortOrder::Descending), Ordering::Less);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggle().toggle(), SortOrder::Ascending);
    }
}
