//! Pure emoji tic-tac-toe game logic.
//!
//! This crate owns everything with algorithmic content and nothing
//! with I/O:
//!
//! - **Board and rules**: the 3x3 board, win/draw detection, and the
//!   winning-triple lookup used for highlighting.
//! - **Typestate lifecycle**: [`GameSetup`] → [`GameInProgress`] →
//!   [`GameFinished`], with move validation and replay.
//! - **Engine**: the computer opponent's move selection at three
//!   difficulty tiers, built on minimax with alpha-beta pruning.
//!
//! The surrounding application owns turn pacing, rendering, and
//! persistence; it calls [`engine::select_move`] once per computer
//! turn and applies the result through the typestate API.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use engine::Difficulty;
pub use phases::Outcome;
pub use position::Position;
pub use types::{Board, Player, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

/// Alias for clarity when a player is referred to by their mark.
pub type Mark = Player;
