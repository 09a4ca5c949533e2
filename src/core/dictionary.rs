//! Set of valid words
//!
//! Membership is by value, so any `Word` built from the same letters is found.

use super::word::{Word, WordError};
use rustc_hash::FxHashSet;

/// The words a round accepts as attempts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Create a dictionary from already validated words
    ///
    /// Duplicates collapse into a single entry.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Build a dictionary from raw strings, rejecting the first invalid entry
    ///
    /// # Errors
    /// Returns the `WordError` of the first entry that is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Dictionary, Word};
    ///
    /// let dictionary = Dictionary::from_strs(&["happy", "loser"]).unwrap();
    /// assert!(dictionary.includes(&Word::new("happy").unwrap()));
    /// assert!(Dictionary::from_strs(&["happy", "sad"]).is_err());
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, WordError> {
        words
            .iter()
            .map(|&raw| Word::new(raw))
            .collect::<Result<FxHashSet<_>, _>>()
            .map(|words| Self { words })
    }

    /// Check whether the word is a dictionary entry
    #[inline]
    #[must_use]
    pub fn includes(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in alphabetical order
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words.into_iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
