//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterMatch, Word};
use colored::Colorize;
use std::collections::BTreeSet;

/// Render an attempt as coloured uppercase letter tiles
///
/// Exact letters are green, misplaced letters yellow, absent letters dimmed.
#[must_use]
pub fn colored_attempt(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.matches())
        .map(|(letter, letter_match)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match letter_match {
                LetterMatch::Exact => tile.black().on_green().bold().to_string(),
                LetterMatch::Misplaced => tile.black().on_yellow().bold().to_string(),
                LetterMatch::Absent => tile.bright_black().to_string(),
            }
        })
        .collect()
}

/// Render an attempt as plain text, marking `[exact]` and `(misplaced)` letters
#[must_use]
pub fn bracketed_attempt(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.matches())
        .map(|(letter, letter_match)| {
            let letter = letter.to_ascii_uppercase();
            match letter_match {
                LetterMatch::Exact => format!("[{letter}]"),
                LetterMatch::Misplaced => format!("({letter})"),
                LetterMatch::Absent => letter.to_string(),
            }
        })
        .collect()
}

/// Format 1-based positions as `{1, 4, 5}`
#[must_use]
pub fn format_positions(positions: &BTreeSet<usize>) -> String {
    let list: Vec<String> = positions.iter().map(ToString::to_string).collect();
    format!("{{{}}}", list.join(", "))
}
