//! Word lists for Wordle rounds
//!
//! Provides an embedded sample dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::SAMPLE;
