//! A player's rack of tiles.

use super::bag::Bag;
use super::tile::{Tile, TileId};

/// Maximum number of tiles a rack holds.
pub const RACK_SIZE: usize = 7;

/// Tiles held by one player. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Rack { tiles: Vec::with_capacity(RACK_SIZE) }
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Rack { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Rack letters as a string, `?` for blanks.
    pub fn letters(&self) -> String {
        self.tiles.iter().map(Tile::rack_char).collect()
    }

    /// Adds a tile back to the rack, clearing any blank assignment.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile.into_reset());
    }

    pub fn extend(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        for tile in tiles {
            self.push(tile);
        }
    }

    /// Index of the first tile matching a rack character (`?` for a blank).
    pub fn position_of(&self, ch: char) -> Option<usize> {
        let ch = ch.to_ascii_uppercase();
        self.tiles.iter().position(|t| t.rack_char() == ch)
    }

    /// Removes the first tile matching a rack character.
    pub fn take(&mut self, ch: char) -> Option<Tile> {
        self.position_of(ch).map(|idx| self.tiles.remove(idx))
    }

    pub fn take_by_id(&mut self, id: TileId) -> Option<Tile> {
        let idx = self.tiles.iter().position(|t| t.id() == id)?;
        Some(self.tiles.remove(idx))
    }

    /// Picks one tile per character in `letters`, honouring multiplicity.
    ///
    /// Returns the ids of the chosen tiles without removing them, or the
    /// first character the rack cannot supply.
    pub fn select(&self, letters: &str) -> Result<Vec<TileId>, char> {
        let mut chosen: Vec<TileId> = Vec::new();
        for ch in letters.chars().map(|c| c.to_ascii_uppercase()) {
            let found = self
                .tiles
                .iter()
                .find(|t| t.rack_char() == ch && !chosen.contains(&t.id()));
            match found {
                Some(t) => chosen.push(t.id()),
                None => return Err(ch),
            }
        }
        Ok(chosen)
    }

    /// Number of tiles needed to get back to a full rack.
    pub fn missing(&self) -> usize {
        RACK_SIZE.saturating_sub(self.tiles.len())
    }

    /// Draws from the bag until the rack is full or the bag is empty.
    /// Returns the number of tiles drawn.
    pub fn refill(&mut self, bag: &mut Bag) -> usize {
        let drawn = bag.draw(self.missing());
        let n = drawn.len();
        self.extend(drawn);
        n
    }
}
