//! Tiles and the standard letter distribution.
//!
//! A tile is a plain owned value: moving it between the bag, a rack, and a
//! board square transfers ownership, so a tile can never sit in two
//! containers at once.

use std::fmt;

/// Unique identity of a tile within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// Character used for a blank tile that has no letter assigned yet.
pub const BLANK_CHAR: char = '?';

/// A letter tile.
///
/// Regular tiles always carry a letter. Blank tiles carry `None` until a
/// letter is assigned at placement time, and are worth 0 points either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    letter: Option<char>,
    value: u32,
    blank: bool,
}

impl Tile {
    /// Creates a regular letter tile.
    pub fn letter(id: TileId, letter: char, value: u32) -> Self {
        Tile {
            id,
            letter: Some(letter.to_ascii_uppercase()),
            value,
            blank: false,
        }
    }

    /// Creates an unassigned blank tile.
    pub fn blank(id: TileId) -> Self {
        Tile {
            id,
            letter: None,
            value: 0,
            blank: true,
        }
    }

    /// Creates a regular tile using the standard value for `letter`.
    /// Returns `None` for characters outside A-Z.
    pub fn standard(id: TileId, letter: char) -> Option<Self> {
        letter_value(letter).map(|value| Tile::letter(id, letter, value))
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// The face letter, or `None` for an unassigned blank.
    pub fn face(&self) -> Option<char> {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Character shown on a rack: the letter, or `?` for any blank.
    pub fn rack_char(&self) -> char {
        if self.blank {
            BLANK_CHAR
        } else {
            self.letter.unwrap_or(BLANK_CHAR)
        }
    }

    /// Assigns a letter to a blank tile. The value stays 0.
    ///
    /// Returns false (and changes nothing) for regular tiles or characters
    /// outside A-Z.
    pub fn assign(&mut self, letter: char) -> bool {
        if !self.blank || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letter = Some(letter.to_ascii_uppercase());
        self.value = 0;
        true
    }

    /// Clears a blank's assigned letter. No-op for regular tiles.
    pub fn reset(&mut self) {
        if self.blank {
            self.letter = None;
            self.value = 0;
        }
    }

    /// Returns the tile with any blank assignment cleared.
    pub fn into_reset(mut self) -> Self {
        self.reset();
        self
    }
}

/// Per-letter `(letter, count, value)` for the standard English set.
pub const DISTRIBUTION: [(char, u8, u32); 26] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
];

/// Number of blank tiles in a full set.
pub const BLANK_COUNT: u8 = 2;

/// Total tiles in a full set, blanks included.
pub const TILE_COUNT: usize = 100;

/// Standard point value of a letter, case-insensitive.
pub fn letter_value(letter: char) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    DISTRIBUTION
        .iter()
        .find(|(l, _, _)| *l == upper)
        .map(|&(_, _, v)| v)
}

/// Expands the distribution into individual tiles with sequential ids.
///
/// Letter tiles come first in alphabetical order, followed by the blanks.
pub fn full_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    let mut next_id = 0u16;
    for &(letter, count, value) in &DISTRIBUTION {
        for _ in 0..count {
            tiles.push(Tile::letter(TileId(next_id), letter, value));
            next_id += 1;
        }
    }
    for _ in 0..BLANK_COUNT {
        tiles.push(Tile::blank(TileId(next_id)));
        next_id += 1;
    }
    tiles
}
