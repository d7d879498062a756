//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! history storage so the game manager can evaluate any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
