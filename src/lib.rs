//! Wordsmith engine library.
//!
//! Exposes the board model, move rules, dictionary validation, game state and
//! protocol modules for use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod rules;
