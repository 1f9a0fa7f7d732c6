//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and from history bookkeeping.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, check_winner};
