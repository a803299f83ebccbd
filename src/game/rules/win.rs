//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;

/// A completed line of three and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WinLine {
    /// Player holding the line.
    player: Player,
    /// The three positions forming the line.
    line: [Position; 3],
}

impl WinLine {
    /// Checks whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// The 8 winning triples in fixed enumeration order: rows top to bottom,
/// columns left to right, then the two diagonals (TL-BR, TR-BL).
///
/// Order is stable so ties on adversarial boards resolve deterministically.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns `Some(WinLine)` for the first triple (in enumeration order)
/// whose three squares hold the same player, `None` otherwise.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| WinLine { player, line });
        }
    }

    None
}
