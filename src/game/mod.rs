//! Tic-tac-toe game logic: board types, rules, and the stateful history.

mod position;
pub mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::{WinLine, is_draw, winning_line};
pub use state::{GameState, GameStatus, HistoryEntry};
pub use types::{Board, Player, Square};
