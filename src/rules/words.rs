//! New-word discovery.
//!
//! Every provisional tile is scanned along both axes. A run is anchored at
//! its first occupied square and keyed by `(start, direction)`, so a word
//! spanning several provisional tiles is reported once. Words are kept apart
//! by position, never by text: two runs spelling the same letters in
//! different places are two words.

use std::collections::HashSet;

use crate::board::{Board, Direction, Pos, BLANK_CHAR};

/// A maximal run of occupied squares formed or extended this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub start: Pos,
    pub direction: Direction,
    /// Squares of the run, in reading order.
    pub squares: Vec<Pos>,
    pub text: String,
}

impl Word {
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Walks back from `pos` along `direction` to the first occupied square of the run.
pub fn run_start(board: &Board, pos: Pos, direction: Direction) -> Pos {
    let (dr, dc) = direction.delta();
    let mut cur = pos;
    while let Some(prev) = cur.offset(-dr, -dc) {
        if !board.is_occupied(prev) {
            break;
        }
        cur = prev;
    }
    cur
}

/// Collects the occupied squares from `start` forward until an empty square or the edge.
pub fn run_from(board: &Board, start: Pos, direction: Direction) -> Vec<Pos> {
    let (dr, dc) = direction.delta();
    let mut squares = Vec::new();
    let mut cur = Some(start);
    while let Some(p) = cur {
        if !board.is_occupied(p) {
            break;
        }
        squares.push(p);
        cur = p.offset(dr, dc);
    }
    squares
}

/// Returns every distinct run that is longer than one square and holds at
/// least one provisional tile, in discovery order.
///
/// Discovery visits provisional squares row-major, horizontal before vertical.
pub fn new_words(board: &Board) -> Vec<Word> {
    let mut seen: HashSet<(Pos, Direction)> = HashSet::new();
    let mut words = Vec::new();

    for sq in board.provisional_squares() {
        for direction in Direction::ALL {
            let start = run_start(board, sq.pos(), direction);
            if !seen.insert((start, direction)) {
                continue;
            }

            let squares = run_from(board, start, direction);
            if squares.len() < 2 {
                continue;
            }
            if !squares.iter().any(|&p| board.square(p).is_provisional()) {
                continue;
            }

            let text = squares
                .iter()
                .filter_map(|&p| board.tile_at(p))
                .map(|t| t.face().unwrap_or(BLANK_CHAR))
                .collect();
            words.push(Word { start, direction, squares, text });
        }
    }

    words
}

/// Texts of the new words, one entry per distinct run.
pub fn extract_new_words(board: &Board) -> Vec<String> {
    new_words(board).into_iter().map(|w| w.text).collect()
}
