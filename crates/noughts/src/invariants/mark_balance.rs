//! Mark-count balance: X opens, so the counts never drift apart.

use super::Invariant;
use crate::types::{GameState, Mark, Square};

/// Invariant: X has placed as many marks as O or exactly one more, and the
/// side to move agrees with the counts.
///
/// The turn flips on every accepted mark, terminal or not, so this holds
/// for finished games too.
pub struct MarkBalance;

impl MarkBalance {
    fn counts(state: &GameState) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for square in state.board().squares() {
            match square {
                Square::Occupied(Mark::X) => x += 1,
                Square::Occupied(Mark::O) => o += 1,
                Square::Empty => {}
            }
        }
        (x, o)
    }
}

impl Invariant for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let (x, o) = Self::counts(state);
        let expected = if x == o { Mark::X } else { Mark::O };
        (x == o || x == o + 1) && state.to_move() == expected
    }

    fn description() -> &'static str {
        "mark counts stay balanced and agree with the side to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{transition, Action, Board};

    #[test]
    fn holds_for_the_initial_snapshot() {
        assert!(MarkBalance::holds(&GameState::new()));
    }

    #[test]
    fn holds_after_alternating_marks() {
        let mut state = GameState::new();
        for cell in [4, 0, 8, 2] {
            state = transition(&state, Action::Mark { cell });
            assert!(MarkBalance::holds(&state));
        }
    }

    #[test]
    fn violated_when_one_mark_runs_ahead() {
        let state = GameState {
            board: Board::new().marked(0, Mark::O).marked(1, Mark::O),
            to_move: Mark::X,
            winner: None,
            over: false,
        };
        assert!(!MarkBalance::holds(&state));
    }

    #[test]
    fn violated_when_the_turn_disagrees_with_the_counts() {
        let state = GameState {
            board: Board::new().marked(0, Mark::X),
            to_move: Mark::X,
            winner: None,
            over: false,
        };
        assert!(!MarkBalance::holds(&state));
    }
}
