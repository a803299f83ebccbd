//! Game state with move history and time travel.
//!
//! `GameState` is a value: every operation takes `&self` and returns the
//! next state instead of mutating in place. History entries are never
//! altered once appended; making a move while viewing an earlier step
//! truncates the discarded future atomically as part of producing the
//! new state. This replacement discipline is what keeps time travel
//! trivially correct.

use super::position::Position;
use super::rules::{WinLine, winning_line};
use super::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One snapshot in the move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played. `None` only for the initial entry.
    location: Option<Position>,
}

/// Game status derived from the currently displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing; this player moves next.
    NextPlayer(Player),
    /// Game ended with a completed line.
    Won(WinLine),
    /// Full board, no winner.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NextPlayer(player) => write!(f, "Next player: {}", player),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player()),
            GameStatus::Draw => write!(f, "The result of match is a draw"),
        }
    }
}

/// Complete game state: board history, the step being displayed, and the
/// move-list display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Snapshots from the empty board up to the latest move.
    history: Vec<HistoryEntry>,
    /// Index into `history` of the currently displayed entry.
    step_number: usize,
    /// Move-list render order. Display concern only; never reorders `history`.
    ascending: bool,
}

impl GameState {
    /// Creates a new game: one empty-board entry, X to move, ascending list.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                location: None,
            }],
            step_number: 0,
            ascending: true,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the currently displayed entry.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns whether the move list renders in ascending step order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the currently displayed history entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// Returns the currently displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the player who moves next.
    ///
    /// Derived from step parity: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.step_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the status of the displayed board: a completed line wins,
    /// otherwise a full board is a draw, otherwise the game continues.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = winning_line(self.board()) {
            GameStatus::Won(win)
        } else if self.board().is_full() {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Places the next player's mark at `pos`, returning the new state.
    ///
    /// Forbidden moves are silent no-ops rather than errors: if the
    /// displayed board already has a winner, or the square is occupied,
    /// the state is returned unchanged. Otherwise any future beyond the
    /// displayed step is discarded, one entry is appended, and the
    /// displayed step advances to it.
    pub fn apply_move(&self, pos: Position) -> Self {
        if winning_line(self.board()).is_some() {
            debug!(position = %pos, "move ignored: game already won");
            return self.clone();
        }
        if !self.board().is_empty(pos) {
            debug!(position = %pos, "move ignored: square occupied");
            return self.clone();
        }

        let player = self.next_player();
        let mut history = self.history[..=self.step_number].to_vec();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));
        history.push(HistoryEntry {
            board,
            location: Some(pos),
        });

        debug!(position = %pos, player = %player, step = history.len() - 1, "move applied");
        Self {
            step_number: history.len() - 1,
            history,
            ascending: self.ascending,
        }
    }

    /// Jumps to a prior (or later) step, returning the new state.
    ///
    /// Only `step_number` changes; history is never touched. The UI only
    /// offers existing steps, so an out-of-range step is a silent no-op.
    pub fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            debug!(step, "jump ignored: no such step");
            return self.clone();
        }

        debug!(step, "jumped to step");
        Self {
            history: self.history.clone(),
            step_number: step,
            ascending: self.ascending,
        }
    }

    /// Flips the move-list display order, returning the new state.
    pub fn toggle_order(&self) -> Self {
        Self {
            history: self.history.clone(),
            step_number: self.step_number,
            ascending: !self.ascending,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
