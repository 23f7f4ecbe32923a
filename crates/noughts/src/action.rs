//! First-class action types for the reducer.
//!
//! Actions are domain events, not side effects. The presentation layer
//! produces exactly these two kinds; anything else is unrepresentable, so
//! the reducer needs no unknown-action failure path.

use serde::{Deserialize, Serialize};

/// An input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark at a cell.
    Mark {
        /// Target cell, 0-8 in row-major order from the top-left.
        cell: usize,
    },
    /// Discard the game and return to the initial snapshot.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Mark { cell } => write!(f, "mark cell {cell}"),
            Action::Reset => write!(f, "reset"),
        }
    }
}
