//! Named, testable invariants over the game state.
//!
//! Each invariant is a zero-sized type implementing [`Invariant`], so suites
//! can assert them by name and report which one broke.

mod snapshot_consistent;
mod step_in_bounds;
mod turn_parity;

pub use snapshot_consistent::SnapshotConsistent;
pub use step_in_bounds::StepInBounds;
pub use turn_parity::TurnParity;

use super::Game;

/// A checkable invariant over a [`Game`].
pub trait Invariant {
    /// Returns true if the invariant holds for the given game.
    fn holds(game: &Game) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}
