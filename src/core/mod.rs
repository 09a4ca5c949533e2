//! Core domain types for Wordle
//!
//! Pure value types: words, the feedback of a guess against a secret, and the
//! dictionary of accepted words. Nothing here logs or performs I/O.

mod dictionary;
mod feedback;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, LetterMatch};
pub use word::{WORD_LENGTH, Word, WordError};
