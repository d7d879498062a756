//! History consistency invariant: entry `n` is the board after `n` moves.

use super::super::{Player, Square, TimeTravelGame};
use super::Invariant;

/// Invariant: Every entry matches its step.
///
/// Step 0 is the empty board with no move. Step `n > 0` has exactly `n`
/// occupied squares and a move by X when `n` is odd, by O when even, whose
/// square holds that player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<TimeTravelGame> for HistoryConsistentInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history()
            .iter_chronological()
            .enumerate()
            .all(|(step, entry)| {
                if entry.board().occupied() != step {
                    return false;
                }
                match (step, entry.last_move()) {
                    (0, None) => true,
                    (0, Some(_)) | (_, None) => false,
                    (n, Some(action)) => {
                        let expected = if n % 2 == 1 { Player::X } else { Player::O };
                        action.player == expected
                            && entry.board().get(action.position) == Square::Occupied(expected)
                    }
                }
            })
    }

    fn description() -> &'static str {
        "History entry n holds n moves, alternating from X"
    }
}
