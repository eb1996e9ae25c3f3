//! Move rules.
//!
//! Structural validation of a provisional placement, discovery of the words
//! it forms, and scoring under the premium-square layout.

pub mod scoring;
pub mod structure;
pub mod words;

pub use scoring::{score_turn, score_word, TurnScore, WordScore, BINGO_BONUS};
pub use structure::{placement_line, validate_structure, Line, StructuralError};
pub use words::{extract_new_words, new_words, run_from, run_start, Word};
