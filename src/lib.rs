//! Strictly History - tic-tac-toe with a time-travel move list
//!
//! The core is [`TimeTravelGame`]: it owns every board snapshot of the game,
//! a pointer to the one being shown, and the order the move list is stored
//! in. A front end sends it commands and reads status, board and move list
//! back; it never reaches into the state.
//!
//! # Architecture
//!
//! - **Rules**: pure winner and full-board checks ([`check_winner`], [`is_full`])
//! - **History**: snapshot arena addressed by step, stored in either order
//! - **Game**: the state manager (`apply_move`, `jump_to`, `toggle_order`)
//! - **Invariants**: properties checked after every command in debug builds
//! - **Session**: text command driver used by the binary
//!
//! # Example
//!
//! ```
//! use strictly_history::{GameStatus, HistoryOrder, Player, Position, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos);
//! }
//! game.jump_to(1);
//! game.toggle_order(HistoryOrder::Descending);
//! assert_eq!(game.status(), GameStatus::Next(Player::O));
//! assert_eq!(game.move_list().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session driver
pub use session::{GameSession, HELP, Reply};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Command, CommandError, FULL_BOARD_STEP, GameStatus, History, HistoryEntry,
    HistoryOrder, IgnoreReason, Move, MoveListItem, MoveOutcome, Player, Position, Square,
    TimeTravelGame,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{check_winner, is_full};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StepInBoundsInvariant, TimeTravelInvariants, TurnParityInvariant,
};
