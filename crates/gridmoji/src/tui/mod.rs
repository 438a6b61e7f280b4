//! Terminal UI: the screen state machine and board rendering.

mod board;
mod controller;
mod screen;
pub mod screens;

pub use controller::App;
pub use screen::{Screen, ScreenTransition};
