//! First-class intents for the time-travel game.
//!
//! The presentation layer never touches game state directly. It turns user
//! input into a [`Command`] and hands it to the game, which reports what
//! happened through [`MoveOutcome`].

use super::history::HistoryOrder;
use super::{Move, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Command {
    /// Click on a board square.
    #[display("play {_0}")]
    Play(Position),
    /// Click on a move-list entry.
    #[display("jump {_0}")]
    JumpTo(usize),
    /// Click on an order toggle.
    #[display("order {_0}")]
    Order(HistoryOrder),
    /// Start over, keeping the list order.
    #[display("reset")]
    Reset,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses one line of the command language.
    ///
    /// A bare cell number or label is shorthand for `play`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::new("Empty command"));
        };
        let arg = words.collect::<Vec<_>>().join(" ");

        match verb.to_lowercase().as_str() {
            "play" | "p" => parse_position(&arg).map(Command::Play),
            "jump" | "j" => arg
                .parse::<usize>()
                .map(Command::JumpTo)
                .map_err(|_| CommandError::new(format!("Invalid step: '{}'", arg))),
            "order" | "o" => parse_order(&arg).map(Command::Order),
            "reset" => Ok(Command::Reset),
            _ => parse_position(s).map(Command::Play),
        }
    }
}

fn parse_position(s: &str) -> Result<Position, CommandError> {
    Position::from_label_or_number(s).ok_or_else(|| {
        CommandError::new(format!("Invalid position: '{}' (expected 0-8)", s.trim()))
    })
}

fn parse_order(s: &str) -> Result<HistoryOrder, CommandError> {
    match s.trim().to_lowercase().as_str() {
        "asc" | "ascending" => Ok(HistoryOrder::Ascending),
        "desc" | "descending" => Ok(HistoryOrder::Descending),
        other => Err(CommandError::new(format!(
            "Invalid order: '{}' (expected asc or desc)",
            other
        ))),
    }
}

/// Why a click on the board was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IgnoreReason {
    /// The shown board already has a winner.
    #[display("game already won by {_0}")]
    GameWon(Player),
    /// The square already holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

/// Result of a board click.
///
/// Ignored clicks leave the game untouched; this only says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded.
    Placed(Move),
    /// The click was a no-op.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if a move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}

/// Input that could not be turned into a valid command.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_forms() {
        assert_eq!("play 4".parse::<Command>().unwrap(), Command::Play(Position::Center));
        assert_eq!("0".parse::<Command>().unwrap(), Command::Play(Position::TopLeft));
        assert_eq!(
            "P bottom-right".parse::<Command>().unwrap(),
            Command::Play(Position::BottomRight)
        );
        assert_eq!(
            "middle-left".parse::<Command>().unwrap(),
            Command::Play(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_parse_jump_and_order() {
        assert_eq!("jump 3".parse::<Command>().unwrap(), Command::JumpTo(3));
        assert_eq!(
            "order desc".parse::<Command>().unwrap(),
            Command::Order(HistoryOrder::Descending)
        );
        assert_eq!(
            "ORDER Ascending".parse::<Command>().unwrap(),
            Command::Order(HistoryOrder::Ascending)
        );
        assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Command>().is_err());
        assert!("play 9".parse::<Command>().is_err());
        assert!("jump -1".parse::<Command>().is_err());
        assert!("order sideways".parse::<Command>().is_err());
        let err = "dance".parse::<Command>().unwrap_err();
        assert!(err.message.contains("dance"));
        let err = "play  12 ".parse::<Command>().unwrap_err();
        assert_eq!(err.message, "Invalid position: '12' (expected 0-8)");
    }

    #[test]
    fn test_display_parses_back() {
        for command in [
            Command::Play(Position::TopRight),
            Command::JumpTo(2),
            Command::Order(HistoryOrder::Descending),
            Command::Reset,
        ] {
            assert_eq!(command.to_string().parse::<Command>().unwrap(), command);
        }
    }
}
