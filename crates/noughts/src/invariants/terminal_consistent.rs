//! Terminal consistency: a game is over exactly when won or full.

use super::Invariant;
use crate::types::GameState;

/// Invariant: `is_over` is true iff a winner exists or no empty cells
/// remain.
pub struct TerminalConsistent;

impl Invariant for TerminalConsistent {
    fn holds(state: &GameState) -> bool {
        state.is_over() == (state.winner().is_some() || state.board().is_full())
    }

    fn description() -> &'static str {
        "a snapshot is over exactly when a winner exists or the board is full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{transition, Action, Board, Mark};

    #[test]
    fn holds_for_the_initial_snapshot() {
        assert!(TerminalConsistent::holds(&GameState::new()));
    }

    #[test]
    fn holds_for_a_won_game() {
        let state = [0, 3, 1, 4, 2]
            .iter()
            .fold(GameState::new(), |state, &cell| {
                transition(&state, Action::Mark { cell })
            });
        assert!(state.is_over());
        assert!(TerminalConsistent::holds(&state));
    }

    #[test]
    fn violated_when_over_is_stale() {
        let state = GameState {
            board: Board::new().marked(4, Mark::X),
            to_move: Mark::O,
            winner: None,
            over: true,
        };
        assert!(!TerminalConsistent::holds(&state));
    }
}
