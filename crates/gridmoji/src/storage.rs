//! JSON persistence for scores and settings.
//!
//! One file per concern under the data directory. Loading tolerates
//! missing or corrupt files by warning and falling back to defaults,
//! so a bad file never blocks a game.

use crate::emoji::Category;
use crate::session::GameMode;
use anyhow::{Context, Result};
use gridmoji_core::{Difficulty, Outcome, Player};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Persisted win/draw tallies across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by player 1.
    #[serde(default)]
    pub player_one_wins: u32,
    /// Rounds won by player 2 (two-player mode).
    #[serde(default)]
    pub player_two_wins: u32,
    /// Rounds won by the computer (one-player mode).
    #[serde(default)]
    pub ai_wins: u32,
    /// Drawn rounds.
    #[serde(default)]
    pub draws: u32,
}

impl Scores {
    /// Records a finished round's outcome under the given mode.
    ///
    /// Player 1 always plays X; in one-player mode O belongs to the
    /// computer.
    #[instrument(skip(self))]
    pub fn record(&mut self, mode: GameMode, outcome: Outcome) {
        match outcome.winner() {
            None => self.draws += 1,
            Some(Player::X) => self.player_one_wins += 1,
            Some(Player::O) => match mode {
                GameMode::OnePlayer => self.ai_wins += 1,
                GameMode::TwoPlayer => self.player_two_wins += 1,
            },
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty tier used for new one-player games.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Emoji category opened first in the picker.
    #[serde(default)]
    pub category: Category,
}

/// File-backed store for [`Scores`] and [`Settings`].
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Creates a store rooted at the given data directory.
    ///
    /// The directory is created lazily on the first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn scores_path(&self) -> PathBuf {
        self.data_dir.join("scores.json")
    }

    fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    /// Loads the scoreboard, falling back to zeroes.
    #[instrument(skip(self))]
    pub fn load_scores(&self) -> Scores {
        load_or_default(&self.scores_path())
    }

    /// Saves the scoreboard.
    #[instrument(skip(self, scores))]
    pub fn save_scores(&self, scores: &Scores) -> Result<()> {
        self.save(&self.scores_path(), scores)
    }

    /// Resets the scoreboard to zeroes and persists it.
    #[instrument(skip(self))]
    pub fn reset_scores(&self) -> Result<Scores> {
        let scores = Scores::default();
        self.save_scores(&scores)?;
        Ok(scores)
    }

    /// Loads the settings, falling back to defaults.
    #[instrument(skip(self))]
    pub fn load_settings(&self) -> Settings {
        load_or_default(&self.settings_path())
    }

    /// Saves the settings.
    #[instrument(skip(self, settings))]
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save(&self.settings_path(), settings)
    }

    fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("creating data directory {}", self.data_dir.display()))?;
        let json = serde_json::to_string_pretty(value).context("serializing to JSON")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "Saved");
        Ok(())
    }
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(error) => {
                warn!(path = %path.display(), %error, "Corrupt file, using defaults");
                T::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "Unreadable file, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_draw() {
        let mut scores = Scores::default();
        scores.record(GameMode::OnePlayer, Outcome::Draw);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.player_one_wins, 0);
    }

    #[test]
    fn test_record_one_player_outcomes() {
        let mut scores = Scores::default();
        scores.record(GameMode::OnePlayer, Outcome::Winner(Player::X));
        scores.record(GameMode::OnePlayer, Outcome::Winner(Player::O));
        assert_eq!(scores.player_one_wins, 1);
        assert_eq!(scores.ai_wins, 1);
        assert_eq!(scores.player_two_wins, 0);
    }

    #[test]
    fn test_record_two_player_outcomes() {
        let mut scores = Scores::default();
        scores.record(GameMode::TwoPlayer, Outcome::Winner(Player::O));
        assert_eq!(scores.player_two_wins, 1);
        assert_eq!(scores.ai_wins, 0);
    }
}
