//! Tic-tac-toe with time-travel history.

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Command, CommandError, IgnoreReason, MoveOutcome};
pub use game::{FULL_BOARD_STEP, TimeTravelGame};
pub use history::{History, HistoryEntry, HistoryOrder};
pub use position::Position;
pub use status::{GameStatus, MoveListItem};
pub use types::{Board, Move, Player, Square};
