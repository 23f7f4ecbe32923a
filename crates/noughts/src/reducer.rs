//! The pure state-transition function.
//!
//! Callers hold a snapshot, feed it an action, and replace it with the
//! returned snapshot. There is no process-wide state and no side effect
//! beyond the return value, so serializing invocations is entirely the
//! caller's concern.

use crate::action::Action;
use crate::invariants;
use crate::rules;
use crate::types::GameState;
use tracing::{debug, instrument};

/// Applies `action` to `state` and returns the next snapshot.
///
/// A mark on an occupied cell, an off-board index, or any mark after the
/// game has ended leaves the state unchanged. Reset returns the initial
/// snapshot from any state.
#[instrument(skip(state), fields(to_move = %state.to_move()))]
pub fn transition(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Mark { cell } => mark(state, cell),
        Action::Reset => GameState::new(),
    }
}

fn mark(state: &GameState, cell: usize) -> GameState {
    if let Some(rejection) = rules::rejection(state, cell) {
        debug!(cell, %rejection, "mark ignored");
        return *state;
    }

    let mover = state.to_move();
    let board = state.board().marked(cell, mover);
    let winner = rules::winner(&board);
    let over = winner.is_some() || board.is_full();

    if over {
        debug!(cell, %mover, ?winner, "game over");
    }

    // The turn flips on every accepted mark, including the one that ends
    // the game.
    let next = GameState {
        board,
        to_move: mover.opponent(),
        winner,
        over,
    };
    invariants::assert_reachable(&next);
    next
}
