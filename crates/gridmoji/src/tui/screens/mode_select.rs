//! Game mode selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, instrument};

use crate::session::GameMode;
use crate::tui::screen::{Screen, ScreenTransition};

const MODES: [GameMode; 2] = [GameMode::OnePlayer, GameMode::TwoPlayer];

/// Screen for choosing one-player or two-player mode.
#[derive(Debug)]
pub struct ModeSelectScreen {
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates the mode selection screen.
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => MODES.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % MODES.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_mode(&self) -> GameMode {
        let idx = self.list_state.selected().unwrap_or(0);
        MODES[idx.min(MODES.len() - 1)]
    }
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ModeSelectScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Choose a game mode")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MODES.iter().map(|m| ListItem::new(m.label())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let help = Paragraph::new("↑/↓ select · Enter confirm · Esc back · Q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let mode = self.selected_mode();
                debug!(?mode, "Mode chosen");
                ScreenTransition::ModeChosen(mode)
            }
            KeyCode::Esc => ScreenTransition::GoBack,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
