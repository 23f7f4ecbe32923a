//! The recorded winner mirrors the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: the snapshot's `winner` field equals what win detection
/// reports for its board.
///
/// No mark lands after a line completes, so the field never goes stale in
/// either direction.
pub struct WinnerOnBoard;

impl Invariant for WinnerOnBoard {
    fn holds(state: &GameState) -> bool {
        state.winner() == rules::winner(state.board())
    }

    fn description() -> &'static str {
        "the recorded winner matches the winning line on the board"
    }
}
