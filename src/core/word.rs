//! Wordle word representation
//!
//! A Word is an immutable 5-letter value. Two words are equal iff their letters
//! are equal position by position, so a Word can be used directly as a set key.

use super::feedback::{Feedback, LetterMatch};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Stores the normalized text alongside its bytes for fast positional access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// ASCII input is case-folded to lowercase before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("Trees").unwrap();
    /// assert_eq!(word.text(), "trees");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();
        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the ordered letters of the word
    #[must_use]
    pub fn letters(&self) -> [char; WORD_LENGTH] {
        self.chars.map(char::from)
    }

    /// Value equality with another word
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self == other
    }

    /// 1-based positions where both words carry the same letter
    ///
    /// Symmetric: `a.matches_position_with(&b) == b.matches_position_with(&a)`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let guess = Word::new("alarm").unwrap();
    /// let secret = Word::new("drama").unwrap();
    /// assert_eq!(guess.matches_position_with(&secret).into_iter().collect::<Vec<_>>(), vec![3]);
    /// ```
    #[must_use]
    pub fn matches_position_with(&self, other: &Self) -> BTreeSet<usize> {
        Feedback::compare(self, other).positions(LetterMatch::Exact)
    }

    /// 1-based positions of letters present in `other` at a different position
    ///
    /// Each occurrence of a letter in `other` is consumed at most once, exact
    /// matches first. Not symmetric when letters repeat.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let guess = Word::new("alarm").unwrap();
    /// let secret = Word::new("drama").unwrap();
    /// let misplaced: Vec<usize> = guess.matches_incorrect_position_with(&secret).into_iter().collect();
    /// assert_eq!(misplaced, vec![1, 4, 5]);
    /// ```
    #[must_use]
    pub fn matches_incorrect_position_with(&self, other: &Self) -> BTreeSet<usize> {
        Feedback::compare(self, other).positions(LetterMatch::Misplaced)
    }

    /// Letters of this word sitting at an exact-match position, in order
    #[must_use]
    pub fn letters_at_correct_position(&self, other: &Self) -> Vec<char> {
        self.letters_at(&self.matches_position_with(other))
    }

    /// Letters of this word sitting at a misplaced position, in order
    #[must_use]
    pub fn letters_at_wrong_position(&self, other: &Self) -> Vec<char> {
        self.letters_at(&self.matches_incorrect_position_with(other))
    }

    fn letters_at(&self, positions: &BTreeSet<usize>) -> Vec<char> {
        positions
            .iter()
            .map(|&position| char::from(self.chars[position - 1]))
            .collect()
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the letter budget used by feedback calculation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
