//! Game state manager with time travel.
//!
//! [`TimeTravelGame`] owns the full history, the step pointer, the turn flag
//! and the list order. It is the only thing a front end talks to: commands
//! go in, and status, board and move list come out.

use super::action::{Command, IgnoreReason, MoveOutcome};
use super::history::{History, HistoryEntry, HistoryOrder};
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::rules::{check_winner, is_full};
use super::status::{GameStatus, MoveListItem};
use super::{Board, Move, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Step reached once all nine squares are filled.
pub const FULL_BOARD_STEP: usize = 9;

/// Tic-tac-toe with a navigable move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTravelGame {
    pub(crate) history: History,
    pub(crate) step: usize,
    pub(crate) x_is_next: bool,
}

impl TimeTravelGame {
    /// Creates a new game listing history oldest-first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::Ascending)
    }

    /// Creates a new game with the given list order.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: History::new(order),
            step: 0,
            x_is_next: true,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the next player's mark at `pos` on the shown board.
    ///
    /// Ignored when the shown board already has a winner or the square is
    /// taken. Otherwise any entries after the current step are discarded
    /// before the new one is recorded.
    #[instrument(skip(self), fields(step = self.step, x_is_next = self.x_is_next))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = self.current();

        if let Some(winner) = check_winner(current.board()) {
            debug!(%winner, "Click ignored, game already won");
            return MoveOutcome::Ignored(IgnoreReason::GameWon(winner));
        }
        if !current.board().is_empty(pos) {
            debug!(%pos, "Click ignored, square occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = Player::from_turn(self.x_is_next);
        let action = Move::new(player, pos);
        let mut board = current.board().clone();
        board.set(pos, Square::Occupied(player));

        self.step = self
            .history
            .truncate_then_append(self.step, HistoryEntry::new(board, action));
        self.x_is_next = !self.x_is_next;
        debug!(%action, step = self.step, "Move recorded");

        self.check_invariants();
        MoveOutcome::Placed(action)
    }

    /// Shows the board as it was after `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a step of the current history. Front ends
    /// only offer steps taken from [`move_list`](Self::move_list).
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump to step {} outside history of {} entries",
            step,
            self.history.len()
        );
        self.step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped");

        self.check_invariants();
    }

    /// Changes the order in which history is stored and listed.
    ///
    /// No-op if `order` is already in effect. The step pointer and turn flag
    /// are unaffected.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self, order: HistoryOrder) {
        if self.history.set_order(order) {
            debug!(%order, "History order changed");
        }

        self.check_invariants();
    }

    /// Starts over with an empty board, keeping the current list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_order(self.order());
        debug!("Game reset");
    }

    /// Routes a command to the matching operation.
    ///
    /// Returns `true` if the state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Play(pos) => self.apply_move(pos).is_placed(),
            Command::JumpTo(step) => {
                let changed = step != self.step;
                self.jump_to(step);
                changed
            }
            Command::Order(order) => {
                let changed = order != self.order();
                self.toggle_order(order);
                changed
            }
            Command::Reset => {
                let changed = *self != Self::with_order(self.order());
                self.reset();
                changed
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Board at the step pointer.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Step currently shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether X moves next on the shown board.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Player to move on the shown board.
    pub fn to_move(&self) -> Player {
        Player::from_turn(self.x_is_next)
    }

    /// Current list order.
    pub fn order(&self) -> HistoryOrder {
        self.history.order()
    }

    /// Full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Status line for the shown board.
    ///
    /// A draw is read off the step pointer; debug builds also check that the
    /// board is full exactly at that step.
    #[instrument(level = "trace", skip(self))]
    pub fn status(&self) -> GameStatus {
        debug_assert_eq!(
            self.step == FULL_BOARD_STEP,
            is_full(self.board()),
            "board fullness disagrees with step {}",
            self.step
        );
        if let Some(winner) = check_winner(self.board()) {
            GameStatus::Won(winner)
        } else if self.step == FULL_BOARD_STEP {
            GameStatus::Draw
        } else {
            GameStatus::Next(self.to_move())
        }
    }

    /// One item per history entry, in storage order.
    ///
    /// Labels depend only on the entry's step, so the same entry reads the
    /// same in either order. Coordinates are shown 1-based as `(col, row)`.
    #[instrument(level = "trace", skip(self))]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        self.history
            .iter_stored()
            .map(|(step, entry)| {
                let label = match entry.last_move() {
                    Some(action) if step > 0 => format!(
                        "Go to move #{}: ({}, {})",
                        step,
                        action.col() + 1,
                        action.row() + 1
                    ),
                    _ => MoveListItem::GAME_START.to_string(),
                };
                MoveListItem::new(label, step == self.step, step)
            })
            .collect()
    }

    /// Verifies state invariants in debug builds.
    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimeTravelInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            panic!("game invariants violated: {:?}", violations);
        }
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
