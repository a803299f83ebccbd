//! Stateless projection of [`GameState`] into renderable data.
//!
//! The front end draws whatever this module produces; nothing here
//! touches the terminal, so the full visual contract (status strings,
//! move labels, list order, highlights) is testable as plain data.

use crate::game::{GameState, GameStatus, Player, Position};
use strum::IntoEnumIterator;

/// What one board cell should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Mark occupying the cell, if any.
    pub mark: Option<Player>,
    /// Whether the cell belongs to the winning line.
    pub winning: bool,
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveItem {
    /// History step this entry jumps to.
    pub step: usize,
    /// Display label.
    pub label: String,
    /// Whether this is the currently displayed step (rendered bold).
    pub current: bool,
}

/// Everything the front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// The 9 cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line text.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveItem>,
    /// Current display order of the move list.
    pub ascending: bool,
}

/// Projects the game state into a [`ViewModel`].
pub fn project(state: &GameState) -> ViewModel {
    let status = state.status();
    let win = match status {
        GameStatus::Won(win) => Some(win),
        _ => None,
    };

    let mut cells = [CellView {
        mark: None,
        winning: false,
    }; 9];
    for pos in Position::iter() {
        cells[pos.index()] = CellView {
            mark: state.board().get(pos).player(),
            winning: win.is_some_and(|w| w.contains(pos)),
        };
    }

    let mut moves: Vec<MoveItem> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveItem {
            step,
            label: move_label(step, entry.location()),
            current: step == state.step_number(),
        })
        .collect();
    // Display transform only; history itself keeps ascending order.
    if !state.ascending() {
        moves.reverse();
    }

    ViewModel {
        cells,
        status: status.to_string(),
        moves,
        ascending: state.ascending(),
    }
}

fn move_label(step: usize, location: &Option<Position>) -> String {
    match location {
        Some(pos) => format!("Go to move #{} ({}, {})", step, pos.row(), pos.col()),
        None => "Go to game start".to_string(),
    }
}
