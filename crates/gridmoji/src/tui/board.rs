//! Board rendering shared by the game screen.

use gridmoji_core::{Board, Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Renders the 3x3 board with player emoji.
///
/// Empty squares show their one-based index so a move can be picked
/// with the number keys. Squares in `highlight` (the winning triple)
/// render bold green.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    player_one_emoji: char,
    player_two_emoji: char,
    highlight: Option<[Position; 3]>,
) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let ctx = CellContext {
        board,
        player_one_emoji,
        player_two_emoji,
        highlight,
    };

    render_row(f, rows[0], &ctx, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], &ctx, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], &ctx, 6);
}

struct CellContext<'a> {
    board: &'a Board,
    player_one_emoji: char,
    player_two_emoji: char,
    highlight: Option<[Position; 3]>,
}

fn render_row(f: &mut Frame, area: Rect, ctx: &CellContext<'_>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], ctx, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], ctx, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], ctx, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, ctx: &CellContext<'_>, idx: usize) {
    let Some(pos) = Position::from_index(idx) else {
        return;
    };

    let highlighted = ctx
        .highlight
        .map(|line| line.contains(&pos))
        .unwrap_or(false);

    let (text, mut style) = match ctx.board.get(pos) {
        Square::Empty => (
            format!("{}", idx + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (ctx.player_one_emoji.to_string(), Style::default()),
        Square::Occupied(Player::O) => (ctx.player_two_emoji.to_string(), Style::default()),
    };

    if highlighted {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
