//! Win detection logic.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Scan order is fixed so evaluation is deterministic. When a single mark
/// completes two lines at once, the earlier entry reports the win; both
/// lines necessarily carry the same mark.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark holds all three cells of a line,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let square = board.get(a);
        if square != Some(Square::Empty) && square == board.get(b) && square == board.get(c) {
            return square.and_then(Square::mark);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_winner_on_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn no_winner_on_incomplete_line() {
        let board = Board::new().marked(0, Mark::X).marked(1, Mark::X);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn no_winner_on_mixed_line() {
        let board = Board::new()
            .marked(0, Mark::X)
            .marked(1, Mark::O)
            .marked(2, Mark::X);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |board, &cell| board.marked(cell, mark));
                assert_eq!(winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn first_line_in_scan_order_reports_a_double_win() {
        // X holds the top row and the left column at once.
        let board = [0, 1, 2, 3, 6]
            .iter()
            .fold(Board::new(), |board, &cell| board.marked(cell, Mark::X));
        assert_eq!(winner(&board), Some(Mark::X));
    }
}
