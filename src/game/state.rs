//! Round outcome

use std::fmt;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Won and Lost accept no further attempts
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!GameState::InProgress.is_terminal());
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
    }

    #[test]
    fn display_labels() {
        assert_eq!(GameState::InProgress.to_string(), "in progress");
        assert_eq!(GameState::Won.to_string(), "won");
        assert_eq!(GameState::Lost.to_string(), "lost");
    }
}
