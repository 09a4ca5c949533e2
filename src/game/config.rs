//! Round configuration

/// Attempts a round may reach before the next miss loses it
pub const DEFAULT_ATTEMPT_THRESHOLD: usize = 5;

/// Configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// A round is lost once the attempt count exceeds this value without a win
    pub attempt_threshold: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(attempt_threshold: usize) -> Self {
        Self { attempt_threshold }
    }

    /// Total attempts a player gets in a round
    #[must_use]
    pub const fn allowed_attempts(&self) -> usize {
        self.attempt_threshold.saturating_add(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_THRESHOLD)
    }
}
