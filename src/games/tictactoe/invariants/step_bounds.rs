//! Step bounds invariant: the pointer always names an existing entry.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: The step pointer is a valid index into history.
pub struct StepInBoundsInvariant;

impl Invariant<TimeTravelGame> for StepInBoundsInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer lies within history"
    }
}
