//! Move history with time-travel support.
//!
//! The history is an arena of immutable snapshots. Entries are addressed by
//! their *step*: the chronological index in which the game produced them.
//! Physical storage may run oldest-first or newest-first depending on the
//! display order, and every accessor here translates steps to storage slots
//! so callers never see the difference.

use super::types::{Board, Move};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// Direction in which history is stored and listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Oldest entry first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Newest entry first.
    #[display("descending")]
    Descending,
}

/// Immutable snapshot of the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot produced by `last_move`.
    pub fn new(board: Board, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Board as it stood after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry, `None` for the game start.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Ordered sequence of history entries.
///
/// Never empty: step 0 is always [`HistoryEntry::start`]. Deserialization
/// rejects an empty entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(deserialize_with = "non_empty_entries")]
    entries: VecDeque<HistoryEntry>,
    order: HistoryOrder,
}

impl History {
    /// Creates a history holding only the start entry.
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            entries: VecDeque::from([HistoryEntry::start()]),
            order,
        }
    }

    /// Number of entries (moves played on this branch plus one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a [`History`]; construction and deserialization both
    /// guarantee the start entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current storage order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    fn slot(&self, step: usize) -> usize {
        match self.order {
            HistoryOrder::Ascending => step,
            HistoryOrder::Descending => self.entries.len() - 1 - step,
        }
    }

    fn step_of_slot(&self, slot: usize) -> usize {
        // The mapping is its own inverse.
        self.slot(slot)
    }

    /// Entry at the given step, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        if step >= self.entries.len() {
            return None;
        }
        self.entries.get(self.slot(step))
    }

    /// Iterates entries in storage order, paired with their step.
    pub fn iter_stored(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(move |(slot, entry)| (self.step_of_slot(slot), entry))
    }

    /// Iterates entries in chronological order, regardless of storage order.
    pub fn iter_chronological(&self) -> impl Iterator<Item = &HistoryEntry> {
        (0..self.entries.len()).filter_map(move |step| self.get(step))
    }

    /// Drops every entry after `step`, then records `entry` as step `step + 1`.
    ///
    /// Returns the step of the appended entry.
    #[instrument(skip(self, entry), fields(order = %self.order, len = self.entries.len()))]
    pub fn truncate_then_append(&mut self, step: usize, entry: HistoryEntry) -> usize {
        debug_assert!(step < self.entries.len(), "step {step} outside history");
        let keep = step + 1;
        let discarded = self.entries.len().saturating_sub(keep);
        match self.order {
            HistoryOrder::Ascending => {
                self.entries.truncate(keep);
                self.entries.push_back(entry);
            }
            HistoryOrder::Descending => {
                self.entries.drain(..discarded);
                self.entries.push_front(entry);
            }
        }
        trace!(discarded, new_len = self.entries.len(), "History branch extended");
        keep
    }

    /// Switches storage order, physically reversing the entries.
    ///
    /// Returns `false` when `order` is already in effect.
    #[instrument(skip(self), fields(current = %self.order))]
    pub fn set_order(&mut self, order: HistoryOrder) -> bool {
        if order == self.order {
            return false;
        }
        self.entries.make_contiguous().reverse();
        self.order = order;
        true
    }

    /// Mutable board access for corrupting state in invariant tests.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self, step: usize) -> &mut Board {
        let slot = self.slot(step);
        &mut self.entries[slot].board
    }
}

impl std::ops::Index<usize> for History {
    type Output = HistoryEntry;

    /// Entry at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a step of this history.
    fn index(&self, step: usize) -> &HistoryEntry {
        assert!(
            step < self.entries.len(),
            "step {} outside history of {} entries",
            step,
            self.entries.len()
        );
        &self.entries[self.slot(step)]
    }
}

fn non_empty_entries<'de, D>(deserializer: D) -> Result<VecDeque<HistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = VecDeque::<HistoryEntry>::deserialize(deserializer)?;
    if entries.is_empty() {
        return Err(serde::de::Error::custom("history must contain the start entry"));
    }
    Ok(entries)
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    fn entry_after(prev: &HistoryEntry, player: Player, pos: Position) -> HistoryEntry {
        let mut board = prev.board().clone();
        board.set(pos, Square::Occupied(player));
        HistoryEntry::new(board, Move::new(player, pos))
    }

    fn three_moves(order: HistoryOrder) -> History {
        let mut history = History::new(order);
        let moves = [
            (Player::X, Position::Center),
            (Player::O, Position::TopLeft),
            (Player::X, Position::BottomRight),
        ];
        for (step, (player, pos)) in moves.into_iter().enumerate() {
            let next = entry_after(history.get(step).unwrap(), player, pos);
            history.truncate_then_append(step, next);
        }
        history
    }

    #[test]
    fn test_new_history_has_start_entry() {
        let history = History::default();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&HistoryEntry::start()));
        assert_eq!(history.get(1), None);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<History>(r#"{"entries":[],"order":"ascending"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("history must contain the start entry"));

        let json = serde_json::to_string(&three_moves(HistoryOrder::Descending)).unwrap();
        let restored: History = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, three_moves(HistoryOrder::Descending));
        assert!(!restored.is_empty());
    }

    #[test]
    fn test_steps_are_stable_across_orders() {
        let asc = three_moves(HistoryOrder::Ascending);
        let desc = three_moves(HistoryOrder::Descending);
        for step in 0..asc.len() {
            assert_eq!(asc.get(step), desc.get(step));
        }
    }

    #[test]
    fn test_descending_stores_newest_first() {
        let history = three_moves(HistoryOrder::Descending);
        let steps: Vec<usize> = history.iter_stored().map(|(step, _)| step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
        let (_, newest) = history.iter_stored().next().unwrap();
        assert_eq!(
            newest.last_move(),
            Some(Move::new(Player::X, Position::BottomRight))
        );
    }

    #[test]
    fn test_truncate_discards_redo_branch() {
        for order in [HistoryOrder::Ascending, HistoryOrder::Descending] {
            let mut history = three_moves(order);
            let branch = entry_after(history.get(1).unwrap(), Player::O, Position::TopRight);
            let step = history.truncate_then_append(1, branch.clone());
            assert_eq!(step, 2);
            assert_eq!(history.len(), 3);
            assert_eq!(history.get(2), Some(&branch));
        }
    }

    #[test]
    fn test_set_order_reverses_storage() {
        let mut history = three_moves(HistoryOrder::Ascending);
        let original = history.clone();

        assert!(history.set_order(HistoryOrder::Descending));
        let stored: Vec<&HistoryEntry> = history.iter_stored().map(|(_, e)| e).collect();
        let mut expected: Vec<&HistoryEntry> = original.iter_chronological().collect();
        expected.reverse();
        assert_eq!(stored, expected);

        assert!(!history.set_order(HistoryOrder::Descending));
        assert!(history.set_order(HistoryOrder::Ascending));
        assert_eq!(history, original);
    }
}
