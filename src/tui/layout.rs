//! Screen regions shared by rendering and mouse hit-testing.
//!
//! Both the renderer and the click handlers work from the same computed
//! rectangles, so a click always lands on exactly what was drawn.

use crate::game::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Full grid width: three cells plus two separator columns.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Full grid height: three cells plus two separator rows.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
/// Minimum terminal width the full layout fits in.
pub const MIN_WIDTH: u16 = GRID_WIDTH + 4 + 24;
/// Minimum terminal height the full layout fits in.
pub const MIN_HEIGHT: u16 = GRID_HEIGHT + 5;

/// Computed regions for one frame.
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Status line block.
    pub status: Rect,
    /// The board grid (cells plus separators).
    pub grid: Rect,
    /// The 9 cell rectangles in row-major order.
    pub cells: [Rect; 9],
    /// Move list block (bordered).
    pub moves: Rect,
    /// Footer line; clicking it toggles the move-list order.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Computes the layout for the given frame area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(GRID_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(24)])
            .split(rows[2]);

        let grid = center_rect(main[0], GRID_WIDTH, GRID_HEIGHT);

        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            cells[pos.index()] = Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            );
        }

        Self {
            title: rows[0],
            status: rows[1],
            grid,
            cells,
            moves: main[1],
            footer: rows[3],
        }
    }

    /// Returns the board position under the given screen coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.index()], column, row))
    }

    /// Returns the display row of the move list under the given screen
    /// coordinates, if the click lands on one of `items` entries.
    ///
    /// The list renders inside a bordered block, so the first entry sits
    /// one row below the block's top edge.
    pub fn move_row_at(&self, column: u16, row: u16, items: usize) -> Option<usize> {
        if !contains(self.moves, column, row) {
            return None;
        }
        // Exclude the border on all four sides.
        if column == self.moves.x
            || column + 1 >= self.moves.x + self.moves.width
            || row == self.moves.y
            || row + 1 >= self.moves.y + self.moves.height
        {
            return None;
        }
        let display_row = (row - self.moves.y - 1) as usize;
        (display_row < items).then_some(display_row)
    }

    /// Checks whether the coordinates land on the order-toggle footer.
    pub fn footer_contains(&self, column: u16, row: u16) -> bool {
        contains(self.footer, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            for b in layout.cells.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_cell_hit_center() {
        let layout = layout();
        let rect = layout.cells[Position::Center.index()];
        let hit = layout.cell_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
        assert_eq!(hit, Some(Position::Center));
    }

    #[test]
    fn test_separator_is_not_a_cell() {
        let layout = layout();
        // One column right of the top-left cell is a separator column.
        let rect = layout.cells[Position::TopLeft.index()];
        assert_eq!(layout.cell_at(rect.x + rect.width, rect.y), None);
    }

    #[test]
    fn test_move_rows_inside_border() {
        let layout = layout();
        let moves = layout.moves;
        // Top border row is not an entry.
        assert_eq!(layout.move_row_at(moves.x + 1, moves.y, 5), None);
        // First row inside the border is entry 0.
        assert_eq!(layout.move_row_at(moves.x + 1, moves.y + 1, 5), Some(0));
        // Rows past the item count miss.
        assert_eq!(layout.move_row_at(moves.x + 1, moves.y + 7, 5), None);
    }
}
