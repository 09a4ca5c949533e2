//! Line-oriented interactive round
//!
//! Reads one attempt per line and prints feedback after each accepted word.

use crate::core::{Dictionary, Word};
use crate::game::{Game, GameConfig, GameError};
use crate::output::formatters::colored_attempt;
use crate::output::{print_board, print_outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Configuration for a round played from the terminal
pub struct PlayConfig {
    pub secret: Word,
    pub dictionary: Dictionary,
    pub game: GameConfig,
}

/// Play one round, reading attempts from `input` and writing to `out`
///
/// The round ends on a win, a loss, `quit`, or end of input. Rejected words
/// do not consume an attempt.
///
/// # Errors
///
/// Returns an error if the secret is not in the dictionary or on an I/O error
/// reading input or writing output.
pub fn run_play<R: BufRead, W: Write>(config: PlayConfig, input: R, out: &mut W) -> Result<Game> {
    let mut game = Game::with_config(config.dictionary, config.secret, config.game)?;
    let allowed = game.config().allowed_attempts();

    writeln!(
        out,
        "Guess the 5-letter word in {allowed} attempts. Type 'quit' to give up.\n"
    )?;

    let mut lines = input.lines();
    while !game.is_finished() {
        write!(out, "Attempt {}/{allowed}: ", game.words_attempted().len() + 1)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let entry = line.trim();

        match entry.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        match game.submit(entry) {
            Ok(feedback) => {
                if let Some(word) = game.words_attempted().last() {
                    writeln!(
                        out,
                        "  {}  {}",
                        colored_attempt(word, &feedback),
                        feedback.to_emoji()
                    )?;
                }
                if !game.is_finished() {
                    writeln!(out, "  {} attempts left", game.attempts_remaining())?;
                }
            }
            Err(GameError::InvalidWord(e)) => {
                writeln!(out, "{} {e}", "❌".red())?;
            }
            Err(GameError::WordNotInDictionary(word)) => {
                writeln!(
                    out,
                    "{} '{}' is not in the word list",
                    "❌".red(),
                    word.text().to_uppercase()
                )?;
            }
            Err(e) => {
                debug!(error = %e, "attempt rejected");
                writeln!(out, "{} {e}", "❌".red())?;
            }
        }
    }

    writeln!(out)?;
    print_board(out, &game)?;
    print_outcome(out, &game)?;

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use std::io::Cursor;

    fn config(words: &[&str], secret: &str) -> PlayConfig {
        PlayConfig {
            secret: Word::new(secret).unwrap(),
            dictionary: Dictionary::from_strs(words).unwrap(),
            game: GameConfig::default(),
        }
    }

    fn play(config: PlayConfig, input: &str) -> (Result<Game>, String) {
        let mut out = Vec::new();
        let result = run_play(config, Cursor::new(input.to_string()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn play_until_win() {
        let (game, output) = play(config(&["paper", "tibia"], "tibia"), "paper\ntibia\n");
        let game = game.unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.words_attempted().len(), 2);
        assert!(output.contains("You won in 2 attempts"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn rejected_words_do_not_count() {
        let (game, output) = play(
            config(&["paper", "tibia"], "tibia"),
            "xxxxx\npap3r\n\ntibia\n",
        );
        let game = game.unwrap();

        assert_eq!(game.words_attempted().len(), 1);
        assert!(game.has_won());
        assert!(output.contains("'XXXXX' is not in the word list"));
        assert!(output.contains("Word contains invalid characters"));
    }

    #[test]
    fn play_until_loss_reveals_secret() {
        let input = "paper\n".repeat(6);
        let (game, output) = play(config(&["paper", "tibia"], "tibia"), &input);

        assert_eq!(game.unwrap().state(), GameState::Lost);
        assert!(output.contains("You lost."));
        assert!(output.contains("TIBIA"));
    }

    #[test]
    fn quit_abandons_round() {
        let (game, output) = play(config(&["paper", "tibia"], "tibia"), "paper\nquit\nTIBIA\n");
        let game = game.unwrap();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.words_attempted().len(), 1);
        assert!(output.contains("Round abandoned after 1 attempt."));
    }

    #[test]
    fn end_of_input_abandons_round() {
        let (game, _) = play(config(&["paper", "tibia"], "tibia"), "");
        assert!(game.unwrap().words_attempted().is_empty());
    }

    #[test]
    fn secret_outside_dictionary_is_an_error() {
        let (result, _) = play(config(&["paper"], "tibia"), "paper\n");
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::SecretWordNotInDictionary(Word::new("tibia").unwrap()))
        );
    }
}
