//! Errors raised while setting up or playing a round

use super::GameState;
use crate::core::{Word, WordError};
use thiserror::Error;

/// Rule violations reported by [`Game`](super::Game)
///
/// A failed call never changes the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("secret word '{0}' is not in the dictionary")]
    SecretWordNotInDictionary(Word),

    #[error("'{0}' is not a valid word")]
    WordNotInDictionary(Word),

    #[error("the game is already {0}")]
    GameAlreadyFinished(GameState),

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}
