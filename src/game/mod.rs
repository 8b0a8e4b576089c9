//! Core game logic: the state record, the per-tick update and the draw list
//! for a playing frame. Nothing here touches the terminal.

pub mod render;
pub mod state;
pub mod update;

pub use render::render;
pub use state::GameState;
pub use update::{update, TickInput, TickOutcome};
