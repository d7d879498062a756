//! Read-only views derived from the game state.
//!
//! Nothing here is stored; the manager recomputes these on demand from the
//! entry under the step pointer.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line for the board currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The shown board has a completed line.
    #[display("Winner: {_0}")]
    Won(Player),
    /// All nine squares filled without a line.
    #[display("It's a draw.")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    Next(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveListItem {
    /// Text shown for the entry, e.g. `Go to move #3: (1, 2)`.
    label: String,
    /// Whether this is the entry under the step pointer.
    is_current: bool,
    /// Step to pass to `jump_to` when the item is chosen.
    step: usize,
}

impl MoveListItem {
    /// Label used for step 0.
    pub const GAME_START: &'static str = "Go to game start";

    /// Creates a list item.
    pub fn new(label: impl Into<String>, is_current: bool, step: usize) -> Self {
        Self {
            label: label.into(),
            is_current,
            step,
        }
    }
}

impl std::fmt::Display for MoveListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_current {
            write!(f, "> {}", self.label)
        } else {
            write!(f, "  {}", self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw.");
        assert_eq!(GameStatus::Next(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_current_item_is_emphasized() {
        let item = MoveListItem::new("Go to move #1: (2, 2)", true, 1);
        assert_eq!(item.to_string(), "> Go to move #1: (2, 2)");
        assert_eq!(*item.step(), 1);
        assert!(*item.is_current());
    }
}
