//! Wordle round state
//!
//! A [`Game`] owns the dictionary, the secret word and the attempts made so far.
//! Its outcome is always derived from the attempts, never stored.

mod config;
mod engine;
mod error;
mod state;

pub use config::{DEFAULT_ATTEMPT_THRESHOLD, GameConfig};
pub use engine::Game;
pub use error::GameError;
pub use state::GameState;
