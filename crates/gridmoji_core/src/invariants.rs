//! Run-time invariants over in-progress games.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are checked in debug builds after every applied
//! move and are testable independently.

use crate::types::{Board, Square};
use crate::typestate::GameInProgress;
use tracing::warn;

/// A logical property that must hold for an in-progress game.
pub trait Invariant {
    /// Checks if the invariant holds for the given game.
    fn holds(game: &GameInProgress) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// Invariant: mark counts stay balanced.
///
/// The first player has placed either as many marks as the second
/// player or exactly one more. Anything else means a move was applied
/// out of turn or a square was overwritten.
pub struct BalancedMarks;

impl Invariant for BalancedMarks {
    fn holds(game: &GameInProgress) -> bool {
        let first = game.board().count(game.first_player());
        let second = game.board().count(game.first_player().opponent());

        let valid = first == second || first == second + 1;
        if !valid {
            warn!(first, second, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "First player's mark count equals the second player's, or exceeds it by one"
    }
}

/// Invariant: the history reconstructs the board exactly.
///
/// Replaying the history onto an empty board must place each mark on
/// a previously empty square and reproduce the current board. This
/// catches both overwritten squares and history drift.
pub struct HistoryConsistent;

impl Invariant for HistoryConsistent {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                warn!(position = %mov.position, "History replays onto an occupied square");
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        let valid = reconstructed == *game.board();
        if !valid {
            warn!("History does not reconstruct the board");
        }
        valid
    }

    fn description() -> &'static str {
        "Replaying the history onto an empty board reproduces the current board"
    }
}

/// Invariant: turns alternate through the history.
///
/// Each recorded move belongs to the opponent of the previous mover,
/// and the side to move is the opponent of the last mover.
pub struct AlternatingTurns;

impl Invariant for AlternatingTurns {
    fn holds(game: &GameInProgress) -> bool {
        let mut expected = game.first_player();
        for mov in game.history() {
            if mov.player != expected {
                warn!(player = %mov.player, expected = %expected, "Turn order violated");
                return false;
            }
            expected = expected.opponent();
        }

        let valid = game.to_move() == expected;
        if !valid {
            warn!(to_move = %game.to_move(), expected = %expected, "Side to move out of sequence");
        }
        valid
    }

    fn description() -> &'static str {
        "Moves alternate between players starting with the first player"
    }
}

/// Checks every game invariant, collecting violations.
pub fn check_all(game: &GameInProgress) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !BalancedMarks::holds(game) {
        violations.push(InvariantViolation {
            description: BalancedMarks::description().to_string(),
        });
    }
    if !HistoryConsistent::holds(game) {
        violations.push(InvariantViolation {
            description: HistoryConsistent::description().to_string(),
        });
    }
    if !AlternatingTurns::holds(game) {
        violations.push(InvariantViolation {
            description: AlternatingTurns::description().to_string(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Asserts that all game invariants hold.
///
/// Panics in debug builds; release builds log and continue.
pub fn assert_invariants(game: &GameInProgress) {
    if let Err(violations) = check_all(game) {
        tracing::error!(?violations, "Game invariant violated");
        debug_assert!(false, "Game invariant violated: {violations:?}");
    }
}
