//! Board state representation.
//!
//! Holds the 225 squares of the grid in row-major order together with the
//! helpers the rules need: occupancy lookups, provisional-tile queries, and
//! the place / recall / commit transitions of a turn.

use super::square::{Pos, Square, SQUARE_COUNT};
use super::tile::Tile;

/// Complete board at a point in time.
///
/// Squares are stored in a fixed-size array indexed by [`Pos::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates an empty board with the standard premium layout.
    pub fn new() -> Self {
        Board {
            squares: std::array::from_fn(|idx| Square::empty(Pos::from_index(idx))),
        }
    }

    pub fn square(&self, pos: Pos) -> &Square {
        &self.squares[pos.index()]
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn tile_at(&self, pos: Pos) -> Option<&Tile> {
        self.squares[pos.index()].tile()
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.squares[pos.index()].is_occupied()
    }

    pub fn has_provisional_tiles(&self) -> bool {
        self.squares.iter().any(Square::is_provisional)
    }

    /// True when any tile from an earlier turn is on the board.
    pub fn has_committed_tiles(&self) -> bool {
        self.squares.iter().any(Square::is_committed)
    }

    /// Every provisional square, in row-major order.
    pub fn provisional_squares(&self) -> Vec<&Square> {
        self.squares.iter().filter(|sq| sq.is_provisional()).collect()
    }

    /// Number of tiles placed this turn.
    pub fn provisional_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_provisional()).count()
    }

    /// Places a tile provisionally. Hands the tile back if the square is
    /// occupied or the tile is a blank with no letter assigned.
    pub fn place(&mut self, pos: Pos, tile: Tile) -> Result<(), Tile> {
        if tile.face().is_none() {
            return Err(tile);
        }
        self.squares[pos.index()].put(tile, true)
    }

    /// Places a tile as if committed on an earlier turn.
    pub fn place_committed(&mut self, pos: Pos, tile: Tile) -> Result<(), Tile> {
        if tile.face().is_none() {
            return Err(tile);
        }
        self.squares[pos.index()].put(tile, false)
    }

    /// Lifts the provisional tile at `pos`, clearing any blank assignment.
    pub fn take_provisional(&mut self, pos: Pos) -> Option<Tile> {
        self.squares[pos.index()]
            .take_provisional()
            .map(Tile::into_reset)
    }

    /// Lifts every provisional tile, clearing blank assignments.
    /// Tiles are returned in row-major order.
    pub fn recall(&mut self) -> Vec<Tile> {
        self.squares
            .iter_mut()
            .filter_map(Square::take_provisional)
            .map(Tile::into_reset)
            .collect()
    }

    /// Makes every provisional tile permanent.
    pub fn commit(&mut self) {
        for sq in self.squares.iter_mut() {
            sq.commit();
        }
    }
}
