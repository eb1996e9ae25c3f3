//! Board geometry: positions, directions, and the premium-square layout.
//!
//! The 15x15 multiplier layout is stored in a compile-time table indexed by
//! `[row][col]`. Positions use zero-based rows and columns internally and the
//! `h8`-style coordinate notation at the protocol boundary.

use std::fmt;
use std::str::FromStr;

use super::tile::Tile;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// Total number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The star square every first move must cover.
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Returns whether a signed (row, col) pair lies on the board.
pub const fn is_in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}

/// A square coordinate. Rows and columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Creates a position, returning `None` when it falls off the board.
    pub fn new(row: usize, col: usize) -> Option<Pos> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Pos { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// Row-major index into the flat square array.
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Pos::index`].
    pub const fn from_index(idx: usize) -> Pos {
        Pos {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Returns the neighbouring position `(dr, dc)` away, if on the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if is_in_bounds(r, c) {
            Some(Pos { row: r as u8, col: c as u8 })
        } else {
            None
        }
    }

    /// The four orthogonal neighbours that exist on the board.
    pub fn neighbours(self) -> impl Iterator<Item = Pos> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// The premium classification of this square.
    pub fn multiplier(self) -> Multiplier {
        LAYOUT[self.row as usize][self.col as usize]
    }
}

impl fmt::Display for Pos {
    /// Formats as column letter plus one-based row, e.g. `h8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square coordinate: '{0}'")]
pub struct ParsePosError(pub String);

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePosError(s.to_string());
        let mut chars = s.chars();
        let col_char = chars.next().ok_or_else(err)?.to_ascii_lowercase();
        if !col_char.is_ascii_lowercase() {
            return Err(err());
        }
        let col = (col_char as u8 - b'a') as usize;
        let row: usize = chars.as_str().parse().map_err(|_| err())?;
        if row == 0 {
            return Err(err());
        }
        Pos::new(row - 1, col).ok_or_else(err)
    }
}

/// Reading direction of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Unit step `(dr, dc)` along this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

/// Premium classification of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The center square. Doubles the word like a double-word square.
    Star,
}

impl Multiplier {
    /// Factor applied to a freshly placed letter on this square.
    pub const fn letter_factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter => 2,
            Multiplier::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to a word containing a freshly placed tile on this square.
    pub const fn word_factor(self) -> u32 {
        match self {
            Multiplier::DoubleWord | Multiplier::Star => 2,
            Multiplier::TripleWord => 3,
            _ => 1,
        }
    }
}

const N: Multiplier = Multiplier::None;
const DL: Multiplier = Multiplier::DoubleLetter;
const TL: Multiplier = Multiplier::TripleLetter;
const DW: Multiplier = Multiplier::DoubleWord;
const TW: Multiplier = Multiplier::TripleWord;
const ST: Multiplier = Multiplier::Star;

/// Premium layout, symmetric about both axes and both diagonals.
#[rustfmt::skip]
pub const LAYOUT: [[Multiplier; BOARD_SIZE]; BOARD_SIZE] = [
    [TW, N,  N,  DL, N,  N,  N,  TW, N,  N,  N,  DL, N,  N,  TW],
    [N,  DW, N,  N,  N,  TL, N,  N,  N,  TL, N,  N,  N,  DW, N ],
    [N,  N,  DW, N,  N,  N,  DL, N,  DL, N,  N,  N,  DW, N,  N ],
    [DL, N,  N,  DW, N,  N,  N,  DL, N,  N,  N,  DW, N,  N,  DL],
    [N,  N,  N,  N,  DW, N,  N,  N,  N,  N,  DW, N,  N,  N,  N ],
    [N,  TL, N,  N,  N,  TL, N,  N,  N,  TL, N,  N,  N,  TL, N ],
    [N,  N,  DL, N,  N,  N,  DL, N,  DL, N,  N,  N,  DL, N,  N ],
    [TW, N,  N,  DL, N,  N,  N,  ST, N,  N,  N,  DL, N,  N,  TW],
    [N,  N,  DL, N,  N,  N,  DL, N,  DL, N,  N,  N,  DL, N,  N ],
    [N,  TL, N,  N,  N,  TL, N,  N,  N,  TL, N,  N,  N,  TL, N ],
    [N,  N,  N,  N,  DW, N,  N,  N,  N,  N,  DW, N,  N,  N,  N ],
    [DL, N,  N,  DW, N,  N,  N,  DL, N,  N,  N,  DW, N,  N,  DL],
    [N,  N,  DW, N,  N,  N,  DL, N,  DL, N,  N,  N,  DW, N,  N ],
    [N,  DW, N,  N,  N,  TL, N,  N,  N,  TL, N,  N,  N,  DW, N ],
    [TW, N,  N,  DL, N,  N,  N,  TW, N,  N,  N,  DL, N,  N,  TW],
];

/// A single board square.
///
/// The tile and provisional flag are private so that a square without a tile
/// can never be marked provisional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pos: Pos,
    multiplier: Multiplier,
    tile: Option<Tile>,
    provisional: bool,
}

impl Square {
    /// Creates an empty square with the layout multiplier for `pos`.
    pub fn empty(pos: Pos) -> Self {
        Square {
            pos,
            multiplier: pos.multiplier(),
            tile: None,
            provisional: false,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }

    /// True when the tile was placed this turn and is not yet committed.
    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    /// True when the square holds a tile from an earlier, accepted turn.
    pub fn is_committed(&self) -> bool {
        self.tile.is_some() && !self.provisional
    }

    /// Puts a tile on the square. Hands the tile back if the square is taken.
    pub(crate) fn put(&mut self, tile: Tile, provisional: bool) -> Result<(), Tile> {
        if self.tile.is_some() {
            return Err(tile);
        }
        self.tile = Some(tile);
        self.provisional = provisional;
        Ok(())
    }

    /// Removes a provisional tile. Committed tiles stay put.
    pub(crate) fn take_provisional(&mut self) -> Option<Tile> {
        if !self.provisional {
            return None;
        }
        self.provisional = false;
        self.tile.take()
    }

    pub(crate) fn commit(&mut self) {
        self.provisional = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_symmetric() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let m = LAYOUT[r][c];
                assert_eq!(m, LAYOUT[c][r], "diagonal mismatch at {},{}", r, c);
                assert_eq!(m, LAYOUT[BOARD_SIZE - 1 - r][c], "vertical mismatch at {},{}", r, c);
                assert_eq!(m, LAYOUT[r][BOARD_SIZE - 1 - c], "horizontal mismatch at {},{}", r, c);
            }
        }
    }

    #[test]
    fn layout_premium_counts() {
        let count = |m: Multiplier| LAYOUT.iter().flatten().filter(|&&x| x == m).count();
        assert_eq!(count(Multiplier::TripleWord), 8);
        assert_eq!(count(Multiplier::DoubleWord), 16);
        assert_eq!(count(Multiplier::TripleLetter), 12);
        assert_eq!(count(Multiplier::DoubleLetter), 24);
        assert_eq!(count(Multiplier::Star), 1);
        assert_eq!(CENTER.multiplier(), Multiplier::Star);
    }

    #[test]
    fn bounds() {
        assert!(is_in_bounds(0, 0));
        assert!(is_in_bounds(14, 14));
        assert!(!is_in_bounds(-1, 3));
        assert!(!is_in_bounds(3, 15));
    }

    #[test]
    fn pos_notation_roundtrip() {
        assert_eq!(CENTER.to_string(), "h8");
        assert_eq!("h8".parse::<Pos>(), Ok(CENTER));
        assert_eq!("A1".parse::<Pos>(), Ok(Pos { row: 0, col: 0 }));
        assert_eq!("o15".parse::<Pos>(), Ok(Pos { row: 14, col: 14 }));
        assert!("p1".parse::<Pos>().is_err());
        assert!("a0".parse::<Pos>().is_err());
        assert!("a16".parse::<Pos>().is_err());
        assert!("".parse::<Pos>().is_err());
        assert!("8h".parse::<Pos>().is_err());
    }

    #[test]
    fn corner_has_two_neighbours() {
        let corner = Pos { row: 0, col: 0 };
        assert_eq!(corner.neighbours().count(), 2);
        assert_eq!(CENTER.neighbours().count(), 4);
    }

    #[test]
    fn multiplier_factors() {
        assert_eq!(Multiplier::DoubleLetter.letter_factor(), 2);
        assert_eq!(Multiplier::TripleLetter.letter_factor(), 3);
        assert_eq!(Multiplier::Star.letter_factor(), 1);
        assert_eq!(Multiplier::Star.word_factor(), 2);
        assert_eq!(Multiplier::TripleWord.word_factor(), 3);
        assert_eq!(Multiplier::DoubleLetter.word_factor(), 1);
    }
}
