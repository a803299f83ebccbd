//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winning_line;

/// Checks if the game is a draw.
///
/// A draw is derived, not detected directly: a full board with no
/// winning line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ];
        for (pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_not_draw() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!is_draw(&board));
    }
}
