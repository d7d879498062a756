//! Monotonic board invariant: each entry extends the one before it.

use super::super::{Square, TimeTravelGame};
use super::Invariant;

/// Invariant: Board squares are monotonic along history.
///
/// Entry `n` equals entry `n - 1` plus its own move, and that move landed on
/// a square that was empty. Marks are never overwritten or removed.
pub struct MonotonicBoardInvariant;

impl Invariant<TimeTravelGame> for MonotonicBoardInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let entries: Vec<_> = game.history().iter_chronological().collect();

        entries.windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            let Some(action) = after.last_move() else {
                return false;
            };
            if !before.board().is_empty(action.position) {
                return false;
            }

            let mut reconstructed = before.board().clone();
            reconstructed.set(action.position, Square::Occupied(action.player));
            reconstructed == *after.board()
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
