//! Embedded word list
//!
//! A small built-in dictionary so the binary can run a round without any
//! external word list.

/// Built-in dictionary entries
pub const SAMPLE: &[&str] = &[
    "added", "alarm", "alert", "audio", "brick", "crane", "dread", "drama", "eerie", "fjord",
    "geese", "ghost", "happy", "irate", "knoll", "loser", "mamma", "maxim", "music", "nymph",
    "ocean", "paper", "pizza", "plumb", "queen", "radio", "robot", "salet", "shake", "slate",
    "speed", "swirl", "think", "those", "tibia", "tight", "tools", "trees", "twins", "valid",
    "vivid", "whale", "xylem", "yield", "zesty",
];
