//! Terminal output formatting
//!
//! Prompts, diagnostics and results shown to the player.

pub mod messages;

pub use messages::USAGE;
