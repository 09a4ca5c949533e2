//! Per-letter feedback for a guess against a secret word
//!
//! Each position is classified as:
//! - Exact (green): same letter at the same position
//! - Misplaced (yellow): letter present elsewhere in the secret
//! - Absent (gray): letter not in the secret, or every occurrence already used
//!
//! Duplicate letters are handled with a letter budget: every occurrence in the
//! secret can be claimed by at most one guess position.

use super::word::{WORD_LENGTH, Word};
use std::collections::BTreeSet;
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMatch {
    Exact,
    Misplaced,
    Absent,
}

impl LetterMatch {
    /// Emoji square used in shared results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterMatch; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterMatch::Exact; WORD_LENGTH]);

    /// Build feedback from explicit per-position matches
    #[must_use]
    pub const fn new(matches: [LetterMatch; WORD_LENGTH]) -> Self {
        Self(matches)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's letter budget
    /// 2. Second pass: left to right, mark misplaced letters while budget remains
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterMatch, Word};
    ///
    /// let guess = Word::new("geese").unwrap();
    /// let secret = Word::new("those").unwrap();
    /// let feedback = Feedback::compare(&guess, &secret);
    ///
    /// assert_eq!(feedback.count_exact(), 2);
    /// assert_eq!(feedback.count_misplaced(), 0);
    /// assert_eq!(feedback.matches()[3], LetterMatch::Exact);
    /// ```
    #[must_use]
    pub fn compare(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterMatch::Absent; WORD_LENGTH];
        let mut budget = secret.char_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterMatch::Exact;
                if let Some(count) = budget.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterMatch::Exact {
                continue;
            }
            if let Some(count) = budget.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterMatch::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// All per-position matches in order
    #[inline]
    #[must_use]
    pub const fn matches(&self) -> &[LetterMatch; WORD_LENGTH] {
        &self.0
    }

    /// 1-based positions carrying the given classification
    #[must_use]
    pub fn positions(&self, kind: LetterMatch) -> BTreeSet<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == kind)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterMatch::Exact)
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(LetterMatch::Misplaced)
    }

    fn count(&self, kind: LetterMatch) -> usize {
        self.0.iter().filter(|&&m| m == kind).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
