//! Move legality: why a mark would be ignored.
//!
//! A rejected mark is normal interaction (re-clicking a filled square), not
//! an error. The reducer's result is the unchanged snapshot either way; the
//! classification here feeds status lines and debug logs.

use crate::types::GameState;

/// Why the reducer ignores a mark action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index does not name one of the nine cells.
    #[display("cell {} is off the board", _0)]
    OutOfBounds(usize),
    /// The target cell already holds a mark.
    #[display("cell {} is already marked", _0)]
    CellOccupied(usize),
    /// The game has ended; only reset changes the state now.
    #[display("the game is over")]
    GameOver,
}

/// Returns why marking `cell` would be ignored, or `None` for a legal move.
pub fn rejection(state: &GameState, cell: usize) -> Option<Rejection> {
    if state.is_over() {
        return Some(Rejection::GameOver);
    }
    if cell >= 9 {
        return Some(Rejection::OutOfBounds(cell));
    }
    if !state.board().is_open(cell) {
        return Some(Rejection::CellOccupied(cell));
    }
    None
}

/// Cell indices still open for play, in ascending order.
///
/// Empty once the game is over, whatever the board holds.
pub fn open_cells(state: &GameState) -> Vec<usize> {
    if state.is_over() {
        return Vec::new();
    }
    (0..9).filter(|&cell| state.board().is_open(cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{transition, Action};

    #[test]
    fn every_cell_is_legal_at_the_start() {
        let state = GameState::new();
        for cell in 0..9 {
            assert_eq!(rejection(&state, cell), None);
        }
        assert_eq!(open_cells(&state), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn off_board_cells_are_rejected() {
        let state = GameState::new();
        assert_eq!(rejection(&state, 9), Some(Rejection::OutOfBounds(9)));
        assert_eq!(
            rejection(&state, usize::MAX),
            Some(Rejection::OutOfBounds(usize::MAX))
        );
    }

    #[test]
    fn occupied_cells_are_rejected() {
        let state = transition(&GameState::new(), Action::Mark { cell: 4 });
        assert_eq!(rejection(&state, 4), Some(Rejection::CellOccupied(4)));
        assert!(!open_cells(&state).contains(&4));
    }

    #[test]
    fn terminal_state_rejects_every_cell() {
        // X takes the top row.
        let state = [0, 3, 1, 4, 2]
            .iter()
            .fold(GameState::new(), |state, &cell| {
                transition(&state, Action::Mark { cell })
            });
        assert!(state.is_over());
        for cell in 0..9 {
            assert_eq!(rejection(&state, cell), Some(Rejection::GameOver));
        }
        assert!(open_cells(&state).is_empty());
    }

    #[test]
    fn rejections_render_readable_messages() {
        assert_eq!(
            Rejection::CellOccupied(4).to_string(),
            "cell 4 is already marked"
        );
        assert_eq!(Rejection::GameOver.to_string(), "the game is over");
    }
}
