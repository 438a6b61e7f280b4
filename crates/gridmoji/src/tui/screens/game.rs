//! The in-game screen: the live board, turn pacing, and scoreboard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use gridmoji_core::{GameResult, GameSetup, Move, Outcome, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, instrument, warn};

use crate::ai::AiOpponent;
use crate::session::{GameMode, MatchConfig};
use crate::storage::Scores;
use crate::tui::board::render_board;
use crate::tui::screen::{Screen, ScreenTransition};

/// Screen shown while a round is being played.
pub struct GameScreen {
    config: MatchConfig,
    /// `None` only transiently while a move is applied.
    flow: Option<GameResult>,
    /// The computer opponent, present in one-player mode.
    ai: Option<AiOpponent>,
    /// Scoreboard snapshot taken at round start.
    scores: Scores,
}

impl GameScreen {
    /// Starts a fresh round for the given configuration.
    #[instrument(skip(config, scores))]
    pub fn new(config: MatchConfig, scores: Scores) -> Self {
        let game = GameSetup::new().start(Player::X);
        let ai = match config.mode() {
            GameMode::OnePlayer => Some(AiOpponent::new("cpu", Player::O, *config.difficulty())),
            GameMode::TwoPlayer => None,
        };
        Self {
            config,
            flow: Some(GameResult::InProgress(game)),
            ai,
            scores,
        }
    }

    /// Returns true when the computer should take the next turn.
    pub fn ai_to_move(&self) -> bool {
        self.ai.is_some()
            && matches!(
                &self.flow,
                Some(GameResult::InProgress(game)) if game.to_move() == Player::O
            )
    }

    /// Runs one computer turn: think, choose, apply.
    #[instrument(skip(self))]
    pub async fn ai_turn(&mut self) -> Result<()> {
        let game = match self.flow.take() {
            Some(GameResult::InProgress(game)) => game,
            other => {
                self.flow = other;
                anyhow::bail!("computer turn requested without a game in progress");
            }
        };
        let Some(ai) = self.ai.as_mut() else {
            self.flow = Some(GameResult::InProgress(game));
            anyhow::bail!("computer turn requested in a two-player game");
        };

        let pos = ai.choose(game.board()).await?;
        match game.clone().make_move(Move::new(ai.mark(), pos)) {
            Ok(next) => {
                self.flow = Some(next);
                Ok(())
            }
            Err(error) => {
                self.flow = Some(GameResult::InProgress(game));
                Err(anyhow::anyhow!("computer played an illegal move: {error}"))
            }
        }
    }

    fn apply_human(&mut self, pos: Position) {
        let game = match self.flow.take() {
            Some(GameResult::InProgress(game)) => game,
            other => {
                self.flow = other;
                return;
            }
        };

        // In one-player mode the keyboard only drives X.
        let mark = game.to_move();
        if self.ai.is_some() && mark != Player::X {
            self.flow = Some(GameResult::InProgress(game));
            return;
        }

        match game.clone().make_move(Move::new(mark, pos)) {
            Ok(next) => self.flow = Some(next),
            Err(error) => {
                debug!(%error, "Ignoring illegal input");
                self.flow = Some(GameResult::InProgress(game));
            }
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        match &self.flow {
            Some(GameResult::Finished(game)) => Some(*game.outcome()),
            _ => None,
        }
    }

    fn emoji_for(&self, player: Player) -> char {
        match player {
            Player::X => *self.config.player_one_emoji(),
            Player::O => *self.config.player_two_emoji(),
        }
    }

    fn status_text(&self) -> String {
        match &self.flow {
            Some(GameResult::InProgress(game)) => {
                let emoji = self.emoji_for(game.to_move());
                if self.ai_to_move() {
                    format!("{emoji}  is thinking…")
                } else {
                    match self.config.mode() {
                        GameMode::OnePlayer => format!("{emoji}  your move"),
                        GameMode::TwoPlayer => {
                            let number = match game.to_move() {
                                Player::X => 1,
                                Player::O => 2,
                            };
                            format!("{emoji}  Player {number} to move")
                        }
                    }
                }
            }
            Some(GameResult::Finished(game)) => match game.outcome().winner() {
                Some(player) => {
                    format!("{}  wins! Press any key…", self.emoji_for(player))
                }
                None => "🤝  It's a draw! Press any key…".to_string(),
            },
            None => String::new(),
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

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let status = Paragraph::new(self.status_text())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[0]);

        if let Some(flow) = &self.flow {
            let highlight = match flow {
                GameResult::Finished(game) => game.winning_line(),
                GameResult::InProgress(_) => None,
            };
            render_board(
                frame,
                chunks[1],
                flow.board(),
                *self.config.player_one_emoji(),
                *self.config.player_two_emoji(),
                highlight,
            );
        }

        let scoreboard = Paragraph::new(self.scoreboard_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Scores"));
        frame.render_widget(scoreboard, chunks[2]);

        let help = Paragraph::new("1-9 place your mark · Esc abandon round · Q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let Some(outcome) = self.outcome() {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
                _ => ScreenTransition::GameOver(outcome),
            };
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                match Position::from_index(idx) {
                    Some(pos) => self.apply_human(pos),
                    None => warn!(idx, "Digit outside the board"),
                }
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::GoToWelcome,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

impl std::fmt::Debug for GameScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameScreen")
            .field("config", &self.config)
            .field("finished", &self.outcome().is_some())
            .finish()
    }
}
