//! The computer opponent.
//!
//! Wraps the core engine with a short artificial delay so moves feel
//! considered rather than instant. The delay is pure pacing; the
//! engine call itself is synchronous and stateless.

use anyhow::Result;
use gridmoji_core::{engine, Board, Difficulty, Player, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Milliseconds the opponent pretends to think before moving.
const THINKING_DELAY_MS: u64 = 600;

/// Computer opponent with a fixed mark and difficulty.
pub struct AiOpponent {
    name: String,
    mark: Player,
    difficulty: Difficulty,
    rng: StdRng,
}

impl AiOpponent {
    /// Creates a new opponent seeded from system entropy.
    pub fn new(name: impl Into<String>, mark: Player, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            mark,
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a fixed seed, for deterministic tests.
    pub fn seeded(name: impl Into<String>, mark: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: name.into(),
            mark,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the opponent's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the opponent's mark.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Returns the opponent's difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a move after the thinking delay.
    ///
    /// # Errors
    ///
    /// Fails only when the board has no open square, which the caller
    /// should have ruled out by checking for a finished game first.
    #[instrument(skip(self, board), fields(ai = %self.name))]
    pub async fn choose(&mut self, board: &Board) -> Result<Position> {
        debug!(difficulty = %self.difficulty, "Opponent thinking");
        tokio::time::sleep(std::time::Duration::from_millis(THINKING_DELAY_MS)).await;

        let pos = self
            .choose_now(board)
            .ok_or_else(|| anyhow::anyhow!("no open square to play"))?;
        debug!(position = %pos, "Opponent chose");
        Ok(pos)
    }

    /// Picks a move without the pacing delay.
    pub fn choose_now(&mut self, board: &Board) -> Option<Position> {
        engine::select_move(board, self.difficulty, self.mark, &mut self.rng)
    }
}
