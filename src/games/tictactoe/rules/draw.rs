//! Full-board detection for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks whether every square holds a mark.
///
/// With no winner on the board this is the draw condition. The game reads
/// it off the step pointer instead and uses this as a cross-check.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}
