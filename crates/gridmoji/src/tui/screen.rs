//! Screen trait and transition type for the TUI state machine.

use crate::emoji::Category;
use crate::session::{GameMode, PlayerSlot};
use crossterm::event::KeyEvent;
use gridmoji_core::{Difficulty, Outcome};
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`App`](crate::tui::App) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen - no state change.
    Stay,
    /// Advance from the welcome screen to mode selection.
    GoToModeSelect,
    /// A game mode was chosen.
    ModeChosen(GameMode),
    /// The selecting player picked an emoji.
    EmojiChosen {
        /// Which player slot was picking.
        slot: PlayerSlot,
        /// The chosen emoji.
        emoji: char,
        /// The category the pick came from; persisted as the new
        /// default.
        category: Category,
    },
    /// A difficulty tier was chosen for the computer opponent.
    DifficultyChosen(Difficulty),
    /// The finished round was acknowledged.
    GameOver(Outcome),
    /// Start another round with the same match configuration.
    PlayAgain,
    /// Return to the welcome screen.
    GoToWelcome,
    /// Go back one screen.
    GoBack,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key
/// events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
