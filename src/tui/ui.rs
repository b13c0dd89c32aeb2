//! Stateless UI rendering from the view model.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_timeline::{CellHighlight, CellView, Player, Square, ViewModel};

use super::app::{App, InputMode};

const CRIMSON: Color = Color::Rgb(220, 20, 60);
const CELL_WIDTH: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Game
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, columns[0], &view, app.cursor());
    draw_info(frame, columns[1], &view, app);
    draw_help(frame, chunks[2], app.mode());
}

fn draw_board(frame: &mut Frame, area: Rect, view: &ViewModel, cursor: usize) {
    let size = view.board_size;
    let width = (size as u16).saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = (size as u16).saturating_add(2);
    let board_area = center_rect(area, width, height);

    let lines: Vec<Line> = (0..size)
        .map(|row| {
            let spans: Vec<Span> = view
                .row(row)
                .iter()
                .enumerate()
                .map(|(col, cell)| draw_cell(cell, row * size + col == cursor))
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{size}x{size}")),
    );
    frame.render_widget(board, board_area);
}

fn draw_cell(cell: &CellView, at_cursor: bool) -> Span<'static> {
    let (symbol, base_style) = match cell.square {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match cell.highlight {
        CellHighlight::Winner => base_style.bg(CRIMSON).fg(Color::White),
        CellHighlight::LastClicked => base_style.fg(CRIMSON),
        CellHighlight::None => base_style,
    };
    let style = if at_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    Span::styled(symbol, style)
}

fn draw_info(frame: &mut Frame, area: Rect, view: &ViewModel, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Board size input
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Move list
        ])
        .split(area);

    let status = Paragraph::new(view.status_text.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, rows[0]);

    draw_size_input(frame, rows[1], view, app);

    let buttons = Paragraph::new(format!("[s] {}   [r] Reset game", view.sort_button_label))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(buttons, rows[2]);

    let items: Vec<ListItem> = view
        .move_list
        .iter()
        .map(|entry| {
            if entry.step == view.current_step {
                ListItem::new(format!("> {}", entry.label))
                    .style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(format!("  {}", entry.label))
            }
        })
        .collect();
    let moves = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(moves, rows[3]);
}

fn draw_size_input(frame: &mut Frame, area: Rect, view: &ViewModel, app: &App) {
    let editing = app.mode() == InputMode::BoardSize;

    let text = if app.size_input().is_empty() {
        Span::styled(
            view.board_size.to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.size_input().to_string())
    };
    let commit = if app.can_commit_size() {
        Span::styled("  [Enter] Change board size", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "  Change board size",
            Style::default().fg(Color::DarkGray),
        )
    };

    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(Line::from(vec![text, commit])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("[b] Board size"),
    );
    frame.render_widget(input, area);
}

fn draw_help(frame: &mut Frame, area: Rect, mode: InputMode) {
    let help = match mode {
        InputMode::Board => {
            "arrows move  enter place  [ ] step  home/end  s sort  r reset  b size  q quit"
        }
        InputMode::BoardSize => "type a size  enter apply  backspace delete  esc back",
    };
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
