//! Wordle - CLI
//!
//! Plays a round against a chosen secret word, or compares two words.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use wordle_engine::{
    commands::{PlayConfig, run_play, score_words},
    core::{Dictionary, Word},
    game::{DEFAULT_ATTEMPT_THRESHOLD, GameConfig},
    logging::{LogSettings, init_logging},
    output::print_score_result,
    wordlists::loader::{dictionary_from_csv, sample_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle game engine: play a round or compare two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round, reading one attempt per line from stdin
    Play {
        /// The secret word to guess
        #[arg(short, long)]
        secret: Word,

        /// Comma-separated dictionary (default: embedded sample list)
        #[arg(short = 'w', long)]
        words: Option<String>,

        /// Attempts a round may exceed before it is lost
        #[arg(
            short,
            long,
            env = "WORDLE_ATTEMPT_THRESHOLD",
            default_value_t = DEFAULT_ATTEMPT_THRESHOLD,
            value_parser = parse_threshold
        )]
        threshold: usize,
    },

    /// Show exact and misplaced positions of a guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Upper bound for `--threshold`
const MAX_ATTEMPT_THRESHOLD: usize = 100;

fn parse_threshold(raw: &str) -> Result<usize, String> {
    let threshold: usize = raw.parse().map_err(|e| format!("{e}"))?;
    if threshold > MAX_ATTEMPT_THRESHOLD {
        return Err(format!("must be at most {MAX_ATTEMPT_THRESHOLD}"));
    }
    Ok(threshold)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.global.no_color {
        colored::control::set_override(false);
    }
    init_logging(LogSettings {
        verbose: cli.global.verbose,
        quiet: cli.global.quiet,
        no_color: cli.global.no_color,
    })?;

    match cli.command {
        Commands::Play {
            secret,
            words,
            threshold,
        } => run_play_command(secret, words.as_deref(), threshold),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
    }
}

fn run_play_command(secret: Word, words: Option<&str>, threshold: usize) -> Result<()> {
    let dictionary: Dictionary = match words {
        Some(list) => dictionary_from_csv(list)?,
        None => sample_dictionary(),
    };

    let config = PlayConfig {
        secret,
        dictionary,
        game: GameConfig::new(threshold),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(config, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_words(guess, secret)?;
    print_score_result(&mut io::stdout(), &result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_within_bound() {
        assert_eq!(parse_threshold("5"), Ok(5));
        assert_eq!(parse_threshold("100"), Ok(100));
    }

    #[test]
    fn threshold_out_of_bound() {
        assert!(parse_threshold("101").is_err());
        assert!(parse_threshold("100000000000").is_err());
        assert!(parse_threshold("-1").is_err());
    }
}
