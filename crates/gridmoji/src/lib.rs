//! Gridmoji - emoji tic-tac-toe for the terminal.
//!
//! The game shell around [`gridmoji_core`]: a multi-screen ratatui
//! interface, JSON persistence of scores and settings, and the AI
//! opponent wrapper that paces the core engine's moves.
//!
//! # Architecture
//!
//! - **TUI**: screen state machine (welcome → mode → emoji →
//!   difficulty → game → summary) driven by an async controller.
//! - **Storage**: scores and settings as JSON files in a data
//!   directory, tolerant of missing or corrupt files.
//! - **AI**: [`AiOpponent`] adds a thinking delay around
//!   `gridmoji_core::engine::select_move`; the engine itself stays
//!   synchronous and stateless.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
pub mod cli;
mod emoji;
mod session;
mod storage;
pub mod tui;

pub use ai::AiOpponent;
pub use emoji::{random_ai_emoji, Category};
pub use session::{GameMode, MatchConfig, PlayerSlot};
pub use storage::{Scores, Settings, Storage};
