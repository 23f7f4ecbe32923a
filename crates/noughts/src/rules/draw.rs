//! Draw detection logic.

use super::win;
use crate::types::Board;
use tracing::instrument;

/// Checks for a draw: every square occupied with no winning line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && win::winner(board).is_none()
}
