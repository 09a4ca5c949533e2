//! Word comparison command
//!
//! Compares a guess against a secret and reports exact and misplaced positions.

use crate::core::{Feedback, Word, WordError};
use std::collections::BTreeSet;

/// Result of comparing a guess with a secret
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
    pub exact: BTreeSet<usize>,
    pub misplaced: BTreeSet<usize>,
}

/// Compare `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either input is not a valid 5-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;

    let feedback = Feedback::compare(&guess, &secret);
    let exact = guess.matches_position_with(&secret);
    let misplaced = guess.matches_incorrect_position_with(&secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
        exact,
        misplaced,
    })
}
