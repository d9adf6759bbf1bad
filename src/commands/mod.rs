//! Command implementations

pub mod play;

pub use play::{run_play, select_answer};
