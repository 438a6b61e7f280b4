//! Welcome screen - the entry point.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::instrument;

use crate::tui::screen::{Screen, ScreenTransition};

/// Splash screen shown at startup.
#[derive(Debug, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    /// Creates the welcome screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for WelcomeScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let text = "\n\n🐱  G R I D M O J I  🐶\n\n\
                    Tic-tac-toe with your favorite emoji.\n\n\n\
                    Press Enter to play\n\
                    Press Q to quit";

        let paragraph = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => ScreenTransition::GoToModeSelect,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
