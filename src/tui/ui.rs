//! Stateless frame rendering from the [`ViewModel`].

use super::layout::{CELL_HEIGHT, CELL_WIDTH, GRID_WIDTH, MIN_HEIGHT, MIN_WIDTH, ScreenLayout};
use crate::game::{Player, Position};
use crate::view::{CellView, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Renders one frame: title, status, board, move list, and footer.
pub fn draw(frame: &mut Frame, vm: &ViewModel, cursor: Position) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let notice = Paragraph::new(format!(
            "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        ))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
        frame.render_widget(notice, area);
        return;
    }

    let layout = ScreenLayout::compute(area);

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(vm.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_board(frame, &layout, vm, cursor);
    draw_moves(frame, &layout, vm);

    let footer = Paragraph::new(format!(
        " order: {} (o/click toggles) · arrows+Enter or 1-9 place · [ ] step · q quit",
        if vm.ascending {
            "ascending"
        } else {
            "descending"
        }
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, vm: &ViewModel, cursor: Position) {
    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.index()], vm.cells[pos.index()], pos == cursor);
    }
    draw_separators(frame, layout.grid);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, under_cursor: bool) {
    let (symbol, base) = match cell.mark {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    // Winning cells are the visual distinction the game ends on; the
    // cursor highlight sits on top so keyboard play stays visible.
    let style = if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else if cell.winning {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(symbol), Line::raw("")])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, grid: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let horizontal = "─".repeat(CELL_WIDTH as usize);
    let rule = format!("{horizontal}┼{horizontal}┼{horizontal}");

    for row in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let area = Rect::new(grid.x, grid.y + row, GRID_WIDTH, 1);
        frame.render_widget(Paragraph::new(rule.as_str()).style(style), area);
    }
    for col in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
        for offset in [0, CELL_HEIGHT + 1, (CELL_HEIGHT + 1) * 2] {
            let area = Rect::new(grid.x + col, grid.y + offset, 1, CELL_HEIGHT);
            frame.render_widget(Paragraph::new("│\n│\n│").style(style), area);
        }
    }
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, vm: &ViewModel) {
    let items: Vec<ListItem> = vm
        .moves
        .iter()
        .map(|item| {
            let style = if item.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(item.label.clone(), style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, layout.moves);
}
