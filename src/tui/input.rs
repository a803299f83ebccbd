//! Gesture translation: keyboard cursor movement and mouse hit-testing.

use super::layout::ScreenLayout;
use crate::game::Position;
use crate::view::ViewModel;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// A user gesture resolved to a game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Place the next mark at this cell.
    Place(Position),
    /// Jump to this history step.
    Jump(usize),
    /// Flip the move-list display order.
    ToggleOrder,
}

/// Moves the board cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Resolves a mouse event to an action, if it lands on anything clickable:
/// a board cell, a move-list entry, or the order toggle.
pub fn mouse_action(
    layout: &ScreenLayout,
    vm: &ViewModel,
    event: MouseEvent,
) -> Option<UiAction> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if let Some(pos) = layout.cell_at(event.column, event.row) {
        return Some(UiAction::Place(pos));
    }

    if let Some(display_row) = layout.move_row_at(event.column, event.row, vm.moves.len()) {
        // The list is in display order; the item itself knows its step.
        return Some(UiAction::Jump(vm.moves[display_row].step));
    }

    if layout.footer_contains(event.column, event.row) {
        return Some(UiAction::ToggleOrder);
    }

    None
}
