//! Turn scoring.
//!
//! Scores the same runs the word extractor reports. Premium squares only
//! count for tiles placed this turn; a committed tile on a premium square
//! scores its face value.

use std::fmt;

use log::debug;

use super::words::{new_words, Word};
use crate::board::{Board, RACK_SIZE};

/// Flat bonus for playing every tile on the rack in one turn.
pub const BINGO_BONUS: u32 = 50;

/// Score of a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: Word,
    pub score: u32,
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word.text, self.score)
    }
}

/// Result of scoring a provisional placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnScore {
    pub total: u32,
    pub words: Vec<WordScore>,
    pub bingo: bool,
    /// Display lines: `WORD (score)` per word, then `BINGO! (+50)` if earned.
    pub breakdown: Vec<String>,
}

/// Scores one run. Multipliers apply only through provisional squares.
pub fn score_word(board: &Board, word: &Word) -> u32 {
    let mut letters = 0;
    let mut word_mult = 1;

    for &pos in &word.squares {
        let sq = board.square(pos);
        let Some(tile) = sq.tile() else { continue };
        let mut value = tile.value();
        if sq.is_provisional() {
            value *= sq.multiplier().letter_factor();
            word_mult *= sq.multiplier().word_factor();
        }
        letters += value;
    }

    letters * word_mult
}

/// Scores every new word of the current placement plus the bingo bonus.
pub fn score_turn(board: &Board) -> TurnScore {
    let mut turn = TurnScore::default();
    let placed = board.provisional_count();
    if placed == 0 {
        return turn;
    }

    for word in new_words(board) {
        let score = score_word(board, &word);
        let entry = WordScore { word, score };
        debug!("scored {}", entry);
        turn.total += score;
        turn.breakdown.push(entry.to_string());
        turn.words.push(entry);
    }

    if placed == RACK_SIZE {
        turn.total += BINGO_BONUS;
        turn.bingo = true;
        turn.breakdown.push(format!("BINGO! (+{})", BINGO_BONUS));
    }

    turn
}
