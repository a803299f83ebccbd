//! Tic-Tac-Toe Rewind - terminal tic-tac-toe with time travel
//!
//! A 3x3 game with a full move history: jump back to any earlier step,
//! play on from there (discarding the abandoned future), and flip the
//! move list between ascending and descending order.
//!
//! # Architecture
//!
//! - **game**: value-typed domain logic. [`game::GameState`] is replaced,
//!   never mutated, on each transition; [`game::winning_line`] is a pure
//!   function over the board.
//! - **view**: stateless projection of the game state into renderable
//!   data, including the exact status and move-list strings.
//! - **tui**: ratatui front end translating clicks and key presses into
//!   game operations.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::game::{GameState, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::Center)
//!     .apply_move(Position::TopLeft);
//! let rewound = state.jump_to(1);
//! assert_eq!(rewound.history().len(), state.history().len());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;
pub mod view;

pub use game::{
    Board, GameState, GameStatus, HistoryEntry, Player, Position, Square, WinLine, is_draw,
    winning_line,
};
pub use view::{CellView, MoveItem, ViewModel, project};
