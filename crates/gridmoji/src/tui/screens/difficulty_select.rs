//! Difficulty selection screen for one-player mode.

use crossterm::event::{KeyCode, KeyEvent};
use gridmoji_core::Difficulty;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

fn describe(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy — plays at random",
        Difficulty::Medium => "Medium — sharp, but slips sometimes",
        Difficulty::Hard => "Hard — never loses",
    }
}

/// Screen for choosing the computer opponent's strength.
#[derive(Debug)]
pub struct DifficultySelectScreen {
    tiers: Vec<Difficulty>,
    list_state: ListState,
}

impl DifficultySelectScreen {
    /// Creates the screen with the cursor on the current setting.
    pub fn new(current: Difficulty) -> Self {
        let tiers: Vec<Difficulty> = Difficulty::iter().collect();
        let mut state = ListState::default();
        let start = tiers.iter().position(|d| *d == current).unwrap_or(0);
        state.select(Some(start));
        Self {
            tiers,
            list_state: state,
        }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.tiers.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.tiers.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_tier(&self) -> Difficulty {
        let idx = self.list_state.selected().unwrap_or(0);
        self.tiers[idx.min(self.tiers.len() - 1)]
    }
}

impl Screen for DifficultySelectScreen {
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

        let title = Paragraph::new("How strong should the computer be?")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .tiers
            .iter()
            .map(|d| ListItem::new(describe(*d)))
            .collect();
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
                let tier = self.selected_tier();
                debug!(%tier, "Difficulty chosen");
                ScreenTransition::DifficultyChosen(tier)
            }
            KeyCode::Esc => ScreenTransition::GoBack,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
