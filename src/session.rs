//! Line-oriented play session.
//!
//! A session owns the single [`TimeTravelGame`] and turns text input into
//! commands. It is the only caller of the game in the binary.

use crate::config::SessionConfig;
use crate::games::tictactoe::{Command, CommandError, TimeTravelGame};
use tracing::{debug, info, instrument};

/// Help text listing the command language.
pub const HELP: &str = "\
Commands:
  play <0-8|label>   place a mark (a bare number works too)
  jump <step>        show the board after that step
  order asc|desc     list moves oldest- or newest-first
  reset              start a new game
  state              print the game state as JSON
  help               show this text
  quit               leave";

/// What the caller should do after a line is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Show(String),
    /// End the session.
    Quit,
}

/// A play session over one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: TimeTravelGame,
    show_board: bool,
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> Self {
        info!(order = %config.initial_order(), "Starting game session");
        Self {
            game: TimeTravelGame::with_order(*config.initial_order()),
            show_board: *config.show_board(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Handles one line of input.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` for input that is not a command, or a jump to
    /// a step the history does not have.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, CommandError> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => return Ok(Reply::Show(self.render())),
            "quit" | "exit" | "q" => return Ok(Reply::Quit),
            "help" | "?" => return Ok(Reply::Show(HELP.to_string())),
            "state" => {
                return serde_json::to_string_pretty(&self.game)
                    .map(Reply::Show)
                    .map_err(|e| CommandError::new(format!("Failed to encode state: {}", e)));
            }
            _ => {}
        }

        let command: Command = line.parse()?;
        if let Command::JumpTo(step) = command
            && step >= self.game.history().len()
        {
            return Err(CommandError::new(format!(
                "No step {} (history has steps 0-{})",
                step,
                self.game.history().len() - 1
            )));
        }

        let changed = self.game.dispatch(command);
        debug!(%command, changed, "Command handled");
        Ok(Reply::Show(self.render()))
    }

    /// Status line, board and move list as plain text.
    pub fn render(&self) -> String {
        let mut out = self.game.status().to_string();
        if self.show_board {
            out.push_str("\n\n");
            out.push_str(&self.game.board().display());
        }
        out.push('\n');
        for item in self.game.move_list() {
            out.push('\n');
            out.push_str(&item.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryOrder, Player, Position, Square};

    fn session() -> GameSession {
        GameSession::new(&SessionConfig::default())
    }

    #[test]
    fn test_play_lines_reach_game() {
        let mut session = session();
        session.handle_line("play 4").unwrap();
        session.handle_line("0").unwrap();
        assert_eq!(session.game().step(), 2);
        assert_eq!(
            session.game().board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut session = session();
        session.handle_line("4").unwrap();
        let err = session.handle_line("jump 5").unwrap_err();
        assert!(err.message.contains("No step 5"));
        assert_eq!(session.game().step(), 1);
    }

    #[test]
    fn test_bad_input_leaves_game_alone() {
        let mut session = session();
        assert!(session.handle_line("play 12").is_err());
        assert_eq!(session.game(), &TimeTravelGame::new());
    }

    #[test]
    fn test_quit_and_help() {
        let mut session = session();
        assert_eq!(session.handle_line(" QUIT ").unwrap(), Reply::Quit);
        assert_eq!(session.handle_line("help").unwrap(), Reply::Show(HELP.to_string()));
    }

    #[test]
    fn test_state_is_json() {
        let mut session = session();
        session.handle_line("4").unwrap();
        let Reply::Show(json) = session.handle_line("state").unwrap() else {
            panic!("Expected text");
        };
        let decoded: TimeTravelGame = serde_json::from_str(&json).unwrap();
        assert_eq!(&decoded, session.game());
    }

    #[test]
    fn test_render_without_board() {
        let config = SessionConfig::default()
            .with_initial_order(HistoryOrder::Descending)
            .with_show_board(false);
        let mut session = GameSession::new(&config);
        let Reply::Show(text) = session.handle_line("4").unwrap() else {
            panic!("Expected text");
        };
        assert_eq!(
            text,
            "Next player: O\n\n> Go to move #1: (2, 2)\n  Go to game start"
        );
    }
}
