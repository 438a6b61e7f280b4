//! Round summary screen.

use crossterm::event::{KeyCode, KeyEvent};
use gridmoji_core::{Outcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::instrument;

use crate::session::{GameMode, MatchConfig};
use crate::storage::Scores;
use crate::tui::screen::{Screen, ScreenTransition};

/// Screen shown after a round ends.
#[derive(Debug)]
pub struct SummaryScreen {
    config: MatchConfig,
    outcome: Outcome,
    scores: Scores,
}

impl SummaryScreen {
    /// Creates the summary for a finished round.
    pub fn new(config: MatchConfig, outcome: Outcome, scores: Scores) -> Self {
        Self {
            config,
            outcome,
            scores,
        }
    }

    fn headline(&self) -> (&'static str, String, String, Color) {
        match self.outcome.winner() {
            None => (
                "It's a Draw!",
                "🤝".to_string(),
                "Nobody wins this round".to_string(),
                Color::Yellow,
            ),
            Some(Player::X) => (
                "Victory!",
                self.config.player_one_emoji().to_string(),
                match self.config.mode() {
                    GameMode::OnePlayer => "You win!".to_string(),
                    GameMode::TwoPlayer => "Player 1 wins!".to_string(),
                },
                Color::Green,
            ),
            Some(Player::O) => match self.config.mode() {
                GameMode::OnePlayer => (
                    "Defeat!",
                    self.config.player_two_emoji().to_string(),
                    "The computer wins this round".to_string(),
                    Color::Red,
                ),
                GameMode::TwoPlayer => (
                    "Victory!",
                    self.config.player_two_emoji().to_string(),
                    "Player 2 wins!".to_string(),
                    Color::Green,
                ),
            },
        }
    }

    fn scoreboard_text(&self) -> String {
        let p1 = self.config.player_one_emoji();
        let p2 = self.config.player_two_emoji();
        match self.config.mode() {
            GameMode::OnePlayer => format!(
                "{p1} You: {}   ·   🤝 Draws: {}   ·   {p2} CPU: {}",
                self.scores.player_one_wins, self.scores.draws, self.scores.ai_wins
            ),
            GameMode::TwoPlayer => format!(
                "{p1} P1: {}   ·   🤝 Draws: {}   ·   {p2} P2: {}",
                self.scores.player_one_wins, self.scores.draws, self.scores.player_two_wins
            ),
        }
    }
}

impl Screen for SummaryScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let (title, emoji, message, color) = self.headline();
        let text = format!("\n\n{title}\n\n{emoji}\n\n{message}");
        let result = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(result, chunks[0]);

        let scoreboard = Paragraph::new(self.scoreboard_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Scores"));
        frame.render_widget(scoreboard, chunks[1]);

        let help = Paragraph::new("R rematch · M main menu · Q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::PlayAgain,
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                ScreenTransition::GoToWelcome
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
