use crate::animation::AnimationController;
use crate::game::{GameEngine, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns used to draw one board cell.
pub const CELL_WIDTH: u16 = 3;
/// Left edge ("  ║") before the first cell.
const BOARD_MARGIN: u16 = 3;
/// Full width of a board line, borders included.
const BOARD_WIDTH: u16 = BOARD_MARGIN + CELL_WIDTH * COLS as u16 + 2;

/// Everything the view needs for one frame.
pub struct ViewModel<'a> {
    pub engine: &'a GameEngine,
    pub animation: &'a AnimationController,
    pub selected_column: usize,
    pub status: &'a str,
    pub message: Option<&'a str>,
}

/// Draw the frame. Returns the screen x of the first board cell, which the
/// input layer uses to map mouse clicks to columns.
pub fn render(frame: &mut Frame, view: &ViewModel) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let board_x = render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_x
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let color = match view.engine.outcome() {
        Some(outcome) => outcome.winner().map_or(Color::White, player_color),
        None => player_color(view.engine.current_turn()),
    };

    let header = Paragraph::new(view.status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four  |  Game {}", view.engine.game_number())),
        );

    frame.render_widget(header, area);
}

/// Which player to draw in each cell this frame. Falling pieces are drawn
/// over the row they are currently passing, not where they will land.
fn visible_cells(animation: &AnimationController) -> [[Option<Player>; ROWS]; COLS] {
    let mut grid = [[None; ROWS]; COLS];
    for (column, row, piece) in animation.pieces() {
        if let Some(visual_row) = animation.display_row(column, row) {
            grid[column][visual_row] = Some(piece.occupant());
        }
    }
    grid
}

fn render_board(frame: &mut Frame, view: &ViewModel, area: Rect) -> u16 {
    let grid = visible_cells(view.animation);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == view.selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for column in grid.iter() {
            let span = match column[row] {
                Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == view.selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_area = centered(area, BOARD_WIDTH);
    frame.render_widget(Paragraph::new(lines), board_area);
    board_area.x + BOARD_MARGIN
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/Click: Drop  |  1-7: Drop in column  |  N: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
