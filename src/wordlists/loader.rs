//! Word list conversion utilities
//!
//! Turns in-memory string lists into `Word`s and dictionaries.

use crate::core::{Dictionary, Word, WordError};

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["tibia", "tib1a", "paper"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from a comma-separated list such as `"loser,music"`
///
/// Blank items are ignored.
///
/// # Errors
///
/// Returns the `WordError` of the first item that is not a valid word.
pub fn dictionary_from_csv(list: &str) -> Result<Dictionary, WordError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(Word::new)
        .collect()
}

/// The embedded sample dictionary
#[must_use]
pub fn sample_dictionary() -> Dictionary {
    words_from_slice(super::SAMPLE).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["loser", "music", "tibia"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "loser");
        assert_eq!(words[2].text(), "tibia");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["loser", "toolong", "abc", "music"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "loser");
        assert_eq!(words[1].text(), "music");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn dictionary_from_csv_trims_blank_items() {
        let dictionary = dictionary_from_csv(" loser, MUSIC ,,").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.includes(&Word::new("music").unwrap()));
    }

    #[test]
    fn dictionary_from_csv_rejects_invalid_items() {
        assert_eq!(
            dictionary_from_csv("paper,tib1a,tibia"),
            Err(WordError::InvalidCharacters)
        );
        assert_eq!(
            dictionary_from_csv("paper,tibias"),
            Err(WordError::InvalidLength(6))
        );
    }

    #[test]
    fn sample_dictionary_contains_every_entry() {
        let dictionary = sample_dictionary();
        assert_eq!(dictionary.len(), super::super::SAMPLE.len());
        assert!(dictionary.includes(&Word::new("tibia").unwrap()));
    }
}
