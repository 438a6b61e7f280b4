//! Move selection for the computer opponent.
//!
//! Three strategies keyed by [`Difficulty`]: uniform-random, a 70/30
//! blend of optimal and random, and deterministic perfect play. The
//! optimal path is a depth-aware minimax search with alpha-beta
//! pruning over the full remaining game tree - at most 9 plies, so no
//! heuristic leaf evaluation is needed.
//!
//! The engine is stateless and never mutates the caller's board; all
//! simulation happens on clones. Randomness is injected so callers
//! (and tests) control the generator.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier for the computer opponent.
///
/// Selected once per game and held constant for its duration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform-random moves.
    Easy,
    /// Optimal with probability 0.7, random otherwise.
    #[default]
    Medium,
    /// Perfect play. Never loses.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Probability that a Medium-tier move uses the optimal search.
///
/// Exact value is load-bearing: gameplay balance and the distribution
/// tests depend on it.
const OPTIMAL_WEIGHT: f64 = 0.7;

/// Base score for a terminal win; depth is subtracted so the engine
/// prefers faster wins and slower losses.
const WIN_SCORE: i32 = 10;

/// Selects a move for `ai` on `board` at the given difficulty.
///
/// Returns `None` only when the board has no empty square; otherwise
/// the result is always a valid empty position. Stateless per call -
/// two Medium calls on the same board may differ because the blend is
/// drawn per call from `rng`.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(OPTIMAL_WEIGHT) {
                optimal_move(board, ai)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => optimal_move(board, ai),
    }
}

/// Uniform-random choice among the empty positions.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }
    Some(open[rng.gen_range(0..open.len())])
}

/// Deterministic optimal choice via exhaustive minimax.
///
/// Ties keep the lowest-index move: candidates are scored in ascending
/// index order and only a strictly higher score replaces the best so
/// far.
#[instrument(skip(board))]
pub fn optimal_move(board: &Board, ai: Player) -> Option<Position> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }

    // Opening book: the center is optimal on the first two plies, and
    // skipping the search on a near-empty board keeps the first
    // response instant.
    if open.len() == 9 {
        return Some(Position::Center);
    }
    if open.len() == 8 && board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let mut best = open[0];
    let mut best_score = i32::MIN;

    for pos in open {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(ai));
        let score = minimax(&next, 0, false, i32::MIN, i32::MAX, ai);
        debug!(position = %pos, score, "Scored candidate move");
        if score > best_score {
            best_score = score;
            best = pos;
        }
    }

    Some(best)
}

/// Depth-aware minimax with alpha-beta pruning.
///
/// `maximizing` is true when `ai` is to move in this branch. Pruning
/// cuts a branch once `beta <= alpha`; it changes which nodes are
/// visited but never the returned score.
fn minimax(
    board: &Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ai: Player,
) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return if winner == ai {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if rules::is_full(board) {
        return 0;
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::valid_moves(board) {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(mover));
        let score = minimax(&next, depth + 1, !maximizing, alpha, beta, ai);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_minimax_scores_immediate_win_by_depth() {
        // X wins by playing TopRight; the win lands at depth 0 in the
        // candidate loop, so the candidate scores WIN_SCORE.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        let mut won = board.clone();
        won.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(
            minimax(&won, 0, false, i32::MIN, i32::MAX, Player::X),
            WIN_SCORE
        );
    }

    #[test]
    fn test_minimax_sees_unavoidable_loss() {
        // O to move cannot stop X from completing either of two lines.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        // Scoring from O's perspective with X to move: strictly negative.
        let score = minimax(&board, 0, false, i32::MIN, i32::MAX, Player::O);
        assert!(score < 0, "expected a losing score, got {score}");
    }

    #[test]
    fn test_random_move_none_on_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_is_always_legal() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::O),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_select_move_does_not_mutate_board() {
        let board = board_from(&[(Position::TopLeft, Player::X)]);
        let snapshot = board.clone();
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            select_move(&board, difficulty, Player::O, &mut rng);
            assert_eq!(board, snapshot);
        }
    }
}
