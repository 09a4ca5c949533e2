//! Display functions for command results

use super::formatters::{bracketed_attempt, colored_attempt, format_positions};
use crate::commands::ScoreResult;
use crate::game::{Game, GameState};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board of a round: one row per attempt
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    for (i, word) in game.words_attempted().iter().enumerate() {
        let feedback = game.feedback_for(word);
        writeln!(
            out,
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_attempt(word, &feedback),
            feedback.to_emoji()
        )?;
    }
    Ok(())
}

/// Print the final outcome of a round
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let attempts = game.words_attempted().len();
    let noun = if attempts == 1 { "attempt" } else { "attempts" };
    match game.state() {
        GameState::Won => writeln!(
            out,
            "\n{}",
            format!("✅ You won in {attempts} {noun}!").green().bold()
        ),
        GameState::Lost => writeln!(
            out,
            "\n{} The word was {}.",
            "❌ You lost.".red().bold(),
            game.secret_word().text().to_uppercase().bright_yellow().bold()
        ),
        GameState::InProgress => writeln!(out, "\nRound abandoned after {attempts} {noun}."),
    }
}

/// Print the result of comparing two words
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn print_score_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase()
    )?;
    writeln!(out, "  {}", colored_attempt(&result.guess, &result.feedback))?;
    writeln!(out, "  {}", bracketed_attempt(&result.guess, &result.feedback))?;
    writeln!(out, "  {}", result.feedback.to_emoji())?;
    writeln!(out, "Exact positions:     {}", format_positions(&result.exact))?;
    writeln!(out, "Misplaced positions: {}", format_positions(&result.misplaced))
}
