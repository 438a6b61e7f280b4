//! Emoji picker screen.
//!
//! Shown once per player: player 1 always picks first; in two-player
//! mode player 2 picks next and cannot take player 1's emoji.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, instrument};

use crate::emoji::Category;
use crate::session::PlayerSlot;
use crate::tui::screen::{Screen, ScreenTransition};

/// Emoji shown per grid row.
const GRID_COLS: usize = 6;

/// Screen where a player picks their emoji from a category palette.
#[derive(Debug, Getters)]
pub struct EmojiSelectScreen {
    /// Which player slot is picking.
    slot: PlayerSlot,
    /// Currently open category.
    category: Category,
    /// Emoji already taken by the other player, if any.
    taken: Option<char>,
    /// Cursor index into the open palette.
    cursor: usize,
}

impl EmojiSelectScreen {
    /// Creates the picker for the given slot.
    pub fn new(slot: PlayerSlot, category: Category, taken: Option<char>) -> Self {
        debug!(?slot, ?category, "Opening emoji picker");
        Self {
            slot,
            category,
            taken,
            cursor: 0,
        }
    }

    fn palette(&self) -> Vec<char> {
        self.category.palette()
    }

    fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.cursor = 0;
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.palette().len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn move_row(&mut self, down: bool) {
        let len = self.palette().len();
        if down {
            if self.cursor + GRID_COLS < len {
                self.cursor += GRID_COLS;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(GRID_COLS);
        }
    }
}

impl Screen for EmojiSelectScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("{} — pick your emoji", self.slot.label()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let category_line = Paragraph::new(format!("◀  {}  ▶", self.category.label()))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(category_line, chunks[1]);

        let palette = self.palette();
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());
        for (row_idx, row) in palette.chunks(GRID_COLS).enumerate() {
            let row_start = row_idx * GRID_COLS;
            let mut spans: Vec<Span> = Vec::new();
            for (offset, emoji) in row.iter().enumerate() {
                let idx = row_start + offset;
                let selected = idx == self.cursor;
                let disabled = self.taken == Some(*emoji);

                let style = if disabled {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                } else if selected {
                    Style::default()
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!("  {}  ", emoji), style));
            }
            lines.push(Line::from(spans).alignment(Alignment::Center));
            lines.push(Line::default());
        }

        let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(grid, chunks[2]);

        let help =
            Paragraph::new("←/→/↑/↓ move · Tab category · Enter pick · Esc back · Q quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                ScreenTransition::Stay
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                ScreenTransition::Stay
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_row(false);
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_row(true);
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Char(']') => {
                self.switch_category(self.category.next());
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Char('[') => {
                self.switch_category(self.category.previous());
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let palette = self.palette();
                let emoji = palette[self.cursor.min(palette.len() - 1)];
                if self.taken == Some(emoji) {
                    debug!(%emoji, "Emoji already taken");
                    return ScreenTransition::Stay;
                }
                debug!(%emoji, slot = ?self.slot, "Emoji chosen");
                ScreenTransition::EmojiChosen {
                    slot: self.slot,
                    emoji,
                    category: self.category,
                }
            }
            KeyCode::Esc => ScreenTransition::GoBack,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
