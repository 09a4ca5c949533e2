//! The round state machine

use super::{GameConfig, GameError, GameState};
use crate::core::{Dictionary, Feedback, Word};
use tracing::{debug, info};

/// A single Wordle round
///
/// Attempts are append-only. The state is computed from them on demand:
/// won iff any attempt equals the secret, lost iff not won and the attempt
/// count exceeds the configured threshold.
#[derive(Debug, Clone)]
pub struct Game {
    dictionary: Dictionary,
    secret: Word,
    attempts: Vec<Word>,
    config: GameConfig,
}

impl Game {
    /// Start a round with the default configuration
    ///
    /// # Errors
    /// Returns `GameError::SecretWordNotInDictionary` if the secret is not a
    /// dictionary entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Dictionary, Word};
    /// use wordle_engine::game::Game;
    ///
    /// let dictionary = Dictionary::from_strs(&["loser", "music"]).unwrap();
    /// let mut game = Game::new(dictionary, Word::new("music").unwrap()).unwrap();
    ///
    /// game.add_attempt(Word::new("music").unwrap()).unwrap();
    /// assert!(game.has_won());
    /// ```
    pub fn new(dictionary: Dictionary, secret: Word) -> Result<Self, GameError> {
        Self::with_config(dictionary, secret, GameConfig::default())
    }

    /// Start a round with an explicit configuration
    ///
    /// # Errors
    /// Returns `GameError::SecretWordNotInDictionary` if the secret is not a
    /// dictionary entry.
    pub fn with_config(
        dictionary: Dictionary,
        secret: Word,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if !dictionary.includes(&secret) {
            return Err(GameError::SecretWordNotInDictionary(secret));
        }

        debug!(
            dictionary_size = dictionary.len(),
            attempt_threshold = config.attempt_threshold,
            "new round"
        );

        Ok(Self {
            dictionary,
            secret,
            attempts: Vec::new(),
            config,
        })
    }

    /// Record an attempt
    ///
    /// # Errors
    /// - `GameError::GameAlreadyFinished` once the round is won or lost
    /// - `GameError::WordNotInDictionary` if the word is not a dictionary entry
    pub fn add_attempt(&mut self, word: Word) -> Result<(), GameError> {
        let state = self.state();
        if state.is_terminal() {
            debug!(%word, %state, "attempt rejected: round finished");
            return Err(GameError::GameAlreadyFinished(state));
        }

        if !self.dictionary.includes(&word) {
            debug!(%word, "attempt rejected: not in dictionary");
            return Err(GameError::WordNotInDictionary(word));
        }

        self.attempts.push(word);
        debug!(attempt = self.attempts.len(), "attempt recorded");

        match self.state() {
            GameState::Won => info!(attempts = self.attempts.len(), "round won"),
            GameState::Lost => info!(secret = %self.secret, "round lost"),
            GameState::InProgress => {}
        }

        Ok(())
    }

    /// Parse, record and score a raw attempt
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` for malformed input, otherwise the
    /// errors of [`Game::add_attempt`].
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, GameError> {
        let word = Word::new(raw)?;
        let feedback = self.feedback_for(&word);
        self.add_attempt(word)?;
        Ok(feedback)
    }

    /// Attempts in submission order
    #[must_use]
    pub fn words_attempted(&self) -> &[Word] {
        &self.attempts
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.attempts.iter().any(|attempt| attempt.same_as(&self.secret))
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        !self.has_won() && self.attempts.len() > self.config.attempt_threshold
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.has_won() {
            GameState::Won
        } else if self.has_lost() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }

    /// Attempts left before the round is lost; zero once finished
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.is_finished() {
            return 0;
        }
        self.config
            .allowed_attempts()
            .saturating_sub(self.attempts.len())
    }

    /// Feedback for a word against the secret
    #[must_use]
    pub fn feedback_for(&self, word: &Word) -> Feedback {
        Feedback::compare(word, &self.secret)
    }

    /// Feedback for the most recent attempt
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.attempts.last().map(|word| self.feedback_for(word))
    }

    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}
