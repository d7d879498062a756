//! Turn parity invariant: X moves on even steps, O on odd steps.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: The stored turn flag agrees with the step pointer's parity.
///
/// The flag is flipped on every move and recomputed on every jump; both
/// paths must land on `step % 2 == 0`.
pub struct TurnParityInvariant;

impl Invariant<TimeTravelGame> for TurnParityInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.x_is_next() == (game.step() % 2 == 0)
    }

    fn description() -> &'static str {
        "Turn flag matches step parity (X on even steps)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_holds_through_moves_and_jumps() {
        let mut game = TimeTravelGame::new();
        assert!(TurnParityInvariant::holds(&game));

        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.apply_move(pos);
            assert!(TurnParityInvariant::holds(&game));
        }
        for step in [1, 0, 3, 2] {
            game.jump_to(step);
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_stale_flag_violates() {
        let mut game = TimeTravelGame::new();
        game.apply_move(Position::Center);
        game.x_is_next = true;
        assert!(!TurnParityInvariant::holds(&game));
    }
}
