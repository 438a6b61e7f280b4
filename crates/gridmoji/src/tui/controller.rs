//! The controller driving the multi-screen TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use gridmoji_core::Outcome;
use ratatui::{backend::Backend, Terminal};
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::emoji::random_ai_emoji;
use crate::session::{GameMode, MatchConfig, PlayerSlot};
use crate::storage::{Scores, Settings, Storage};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{
    DifficultySelectScreen, EmojiSelectScreen, GameScreen, ModeSelectScreen, SummaryScreen,
    WelcomeScreen,
};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    Welcome(WelcomeScreen),
    ModeSelect(ModeSelectScreen),
    EmojiSelect(EmojiSelectScreen),
    DifficultySelect(DifficultySelectScreen),
    Game(GameScreen),
    Summary(SummaryScreen),
}

/// The application: persisted state plus the in-flight match setup.
///
/// Call [`App::run`] to start the event loop.
#[derive(Debug)]
pub struct App {
    storage: Storage,
    settings: Settings,
    scores: Scores,
    mode: Option<GameMode>,
    player_one_emoji: Option<char>,
    player_two_emoji: Option<char>,
}

impl App {
    /// Creates the application, loading persisted scores and settings.
    #[instrument(skip(storage))]
    pub fn new(storage: Storage) -> Self {
        let settings = storage.load_settings();
        let scores = storage.load_scores();
        info!(?settings, ?scores, "Loaded persisted state");
        Self {
            storage,
            settings,
            scores,
            mode: None,
            player_one_emoji: None,
            player_two_emoji: None,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Renders the active screen, lets the computer take its turns,
    /// and drives screen transitions from key events.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting gridmoji event loop");

        let mut screen = ActiveScreen::Welcome(WelcomeScreen::new());

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::Welcome(s) => s.render(f),
                ActiveScreen::ModeSelect(s) => s.render(f),
                ActiveScreen::EmojiSelect(s) => s.render(f),
                ActiveScreen::DifficultySelect(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
                ActiveScreen::Summary(s) => s.render(f),
            })?;

            // The computer moves between renders; input stays paused
            // while it "thinks", matching the original pacing.
            if let ActiveScreen::Game(game) = &mut screen {
                if game.ai_to_move() {
                    game.ai_turn().await?;
                    continue;
                }
            }

            // Poll for input with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Welcome(s) => s.handle_key(key),
                    ActiveScreen::ModeSelect(s) => s.handle_key(key),
                    ActiveScreen::EmojiSelect(s) => s.handle_key(key),
                    ActiveScreen::DifficultySelect(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                    ActiveScreen::Summary(s) => s.handle_key(key),
                };
                debug!(?transition, "Screen transition");

                match self.apply(screen, transition) {
                    Some(next) => screen = next,
                    None => break,
                }
            }
        }

        info!("Exiting gridmoji");
        Ok(())
    }

    /// Applies a transition, returning the next screen or `None` to quit.
    fn apply(&mut self, screen: ActiveScreen, transition: ScreenTransition) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(screen),
            ScreenTransition::Quit => None,
            ScreenTransition::GoToWelcome => Some(ActiveScreen::Welcome(WelcomeScreen::new())),
            ScreenTransition::GoToModeSelect => {
                Some(ActiveScreen::ModeSelect(ModeSelectScreen::new()))
            }
            ScreenTransition::ModeChosen(mode) => {
                self.mode = Some(mode);
                self.player_one_emoji = None;
                self.player_two_emoji = None;
                Some(ActiveScreen::EmojiSelect(EmojiSelectScreen::new(
                    PlayerSlot::One,
                    self.settings.category,
                    None,
                )))
            }
            ScreenTransition::EmojiChosen {
                slot: PlayerSlot::One,
                emoji,
                category,
            } => {
                self.player_one_emoji = Some(emoji);
                self.remember_category(category);
                match self.mode {
                    Some(GameMode::TwoPlayer) => {
                        Some(ActiveScreen::EmojiSelect(EmojiSelectScreen::new(
                            PlayerSlot::Two,
                            category,
                            Some(emoji),
                        )))
                    }
                    _ => {
                        let ai_emoji =
                            random_ai_emoji(category, emoji, &mut rand::thread_rng());
                        self.player_two_emoji = Some(ai_emoji);
                        Some(ActiveScreen::DifficultySelect(DifficultySelectScreen::new(
                            self.settings.difficulty,
                        )))
                    }
                }
            }
            ScreenTransition::EmojiChosen {
                slot: PlayerSlot::Two,
                emoji,
                category,
            } => {
                self.player_two_emoji = Some(emoji);
                self.remember_category(category);
                self.start_round()
            }
            ScreenTransition::DifficultyChosen(difficulty) => {
                self.settings.difficulty = difficulty;
                if let Err(error) = self.storage.save_settings(&self.settings) {
                    warn!(%error, "Failed to save settings");
                }
                self.start_round()
            }
            ScreenTransition::GameOver(outcome) => self.finish_round(outcome),
            ScreenTransition::PlayAgain => self.start_round(),
            ScreenTransition::GoBack => Some(self.go_back(screen)),
        }
    }

    /// Persists the last-used emoji category as the new default.
    fn remember_category(&mut self, category: crate::emoji::Category) {
        if self.settings.category == category {
            return;
        }
        self.settings.category = category;
        if let Err(error) = self.storage.save_settings(&self.settings) {
            warn!(%error, "Failed to save settings");
        }
    }

    /// One step backwards in the setup flow.
    fn go_back(&mut self, screen: ActiveScreen) -> ActiveScreen {
        match screen {
            ActiveScreen::ModeSelect(_) => ActiveScreen::Welcome(WelcomeScreen::new()),
            ActiveScreen::EmojiSelect(s) if *s.slot() == PlayerSlot::Two => {
                ActiveScreen::EmojiSelect(EmojiSelectScreen::new(
                    PlayerSlot::One,
                    self.settings.category,
                    None,
                ))
            }
            ActiveScreen::EmojiSelect(_) => ActiveScreen::ModeSelect(ModeSelectScreen::new()),
            ActiveScreen::DifficultySelect(_) => ActiveScreen::EmojiSelect(
                EmojiSelectScreen::new(PlayerSlot::One, self.settings.category, None),
            ),
            other => other,
        }
    }

    /// Assembles the match configuration from the collected choices.
    fn match_config(&self) -> Option<MatchConfig> {
        let mode = self.mode?;
        let player_one = self.player_one_emoji?;
        let player_two = self.player_two_emoji?;
        Some(MatchConfig::new(
            mode,
            player_one,
            player_two,
            self.settings.difficulty,
        ))
    }

    /// Starts a round, or falls back to the welcome screen if the
    /// setup flow was somehow incomplete.
    fn start_round(&mut self) -> Option<ActiveScreen> {
        match self.match_config() {
            Some(config) => {
                info!(?config, "Starting round");
                Some(ActiveScreen::Game(GameScreen::new(config, self.scores)))
            }
            None => {
                warn!("Round requested before setup finished");
                Some(ActiveScreen::Welcome(WelcomeScreen::new()))
            }
        }
    }

    /// Records and persists a finished round, then shows the summary.
    #[instrument(skip(self))]
    fn finish_round(&mut self, outcome: Outcome) -> Option<ActiveScreen> {
        let Some(mode) = self.mode else {
            warn!("Game over without an active mode");
            return Some(ActiveScreen::Welcome(WelcomeScreen::new()));
        };

        self.scores.record(mode, outcome);
        if let Err(error) = self.storage.save_scores(&self.scores) {
            warn!(%error, "Failed to save scores");
        }

        match self.match_config() {
            Some(config) => Some(ActiveScreen::Summary(SummaryScreen::new(
                config,
                outcome,
                self.scores,
            ))),
            None => Some(ActiveScreen::Welcome(WelcomeScreen::new())),
        }
    }
}
