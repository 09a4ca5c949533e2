//! Wordle Engine
//!
//! Word validation, duplicate-aware letter matching and round state for Wordle.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Dictionary, Word};
//! use wordle_engine::game::Game;
//!
//! let dictionary = Dictionary::from_strs(&["alarm", "drama"]).unwrap();
//! let secret = Word::new("drama").unwrap();
//! let mut game = Game::new(dictionary, secret.clone()).unwrap();
//!
//! let guess = Word::new("alarm").unwrap();
//! game.add_attempt(guess.clone()).unwrap();
//!
//! assert_eq!(guess.matches_position_with(&secret).len(), 1);
//! assert_eq!(guess.matches_incorrect_position_with(&secret).len(), 3);
//! assert!(!game.has_won());
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup for the binary
pub mod logging;
