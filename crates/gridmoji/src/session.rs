//! Per-match configuration assembled by the screen flow.

use derive_getters::Getters;
use gridmoji_core::Difficulty;

/// How many humans are at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the computer.
    OnePlayer,
    /// Two humans sharing the keyboard.
    TwoPlayer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnePlayer => "1 Player (vs computer)",
            Self::TwoPlayer => "2 Players",
        }
    }
}

/// Which player slot is currently picking an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    /// Player 1 (mark X, moves first).
    One,
    /// Player 2 (mark O).
    Two,
}

impl PlayerSlot {
    /// Returns the display label for this slot.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Player 1",
            Self::Two => "Player 2",
        }
    }
}

/// Everything a round needs, fixed for the round's duration.
///
/// Player 1 always plays X and moves first; in one-player mode the
/// computer plays O.
#[derive(Debug, Clone, Copy, Getters)]
pub struct MatchConfig {
    /// Selected game mode.
    mode: GameMode,
    /// Emoji shown for player 1's marks.
    player_one_emoji: char,
    /// Emoji shown for player 2's (or the computer's) marks.
    player_two_emoji: char,
    /// Difficulty tier for the computer opponent (ignored in
    /// two-player mode).
    difficulty: Difficulty,
}

impl MatchConfig {
    /// Creates a new match configuration.
    pub fn new(
        mode: GameMode,
        player_one_emoji: char,
        player_two_emoji: char,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            mode,
            player_one_emoji,
            player_two_emoji,
            difficulty,
        }
    }
}
