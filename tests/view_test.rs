//! Tests for the view projection: exact strings, list order, highlights.

use tictactoe_rewind::game::{GameState, Player, Position};
use tictactoe_rewind::view::project;

fn two_moves() -> GameState {
    // X center, O top-left.
    GameState::new()
        .apply_move(Position::Center)
        .apply_move(Position::TopLeft)
}

#[test]
fn test_move_list_labels() {
    let vm = project(&two_moves());
    let labels: Vec<&str> = vm.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (1, 1)",
            "Go to move #2 (0, 0)",
        ]
    );
}

#[test]
fn test_current_entry_is_marked() {
    let state = two_moves().jump_to(1);
    let vm = project(&state);
    let current: Vec<usize> = vm
        .moves
        .iter()
        .filter(|m| m.current)
        .map(|m| m.step)
        .collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn test_toggle_reverses_display_only() {
    let state = two_moves();
    let ascending = project(&state);
    let descending = project(&state.toggle_order());

    let mut reversed = ascending.moves.clone();
    reversed.reverse();
    assert_eq!(descending.moves, reversed);

    // Toggling twice restores the ascending rendering.
    let restored = project(&state.toggle_order().toggle_order());
    assert_eq!(restored.moves, ascending.moves);
}

#[test]
fn test_board_cells_show_marks() {
    let vm = project(&two_moves());
    assert_eq!(vm.cells[Position::Center.index()].mark, Some(Player::X));
    assert_eq!(vm.cells[Position::TopLeft.index()].mark, Some(Player::O));
    assert_eq!(vm.cells[Position::BottomRight.index()].mark, None);
}

#[test]
fn test_winner_status_and_highlight() {
    let state = GameState::new()
        .apply_move(Position::TopLeft)
        .apply_move(Position::Center)
        .apply_move(Position::TopCenter)
        .apply_move(Position::MiddleRight)
        .apply_move(Position::TopRight);
    let vm = project(&state);

    assert_eq!(vm.status, "Winner: X");
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert!(vm.cells[pos.index()].winning);
    }
    assert_eq!(vm.cells.iter().filter(|c| c.winning).count(), 3);
}

#[test]
fn test_time_travel_view_shows_past_board() {
    let state = two_moves().jump_to(1);
    let vm = project(&state);
    assert_eq!(vm.cells[Position::Center.index()].mark, Some(Player::X));
    assert_eq!(vm.cells[Position::TopLeft.index()].mark, None);
    assert_eq!(vm.status, "Next player: O");
    // The list still shows every recorded step.
    assert_eq!(vm.moves.len(), 3);
}
