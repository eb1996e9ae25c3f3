//! The tile bag.
//!
//! Tiles are drawn from the end of a uniformly shuffled vector, which gives
//! uniform-random draws without replacement.

use rand::seq::SliceRandom;
use rand::Rng;

use super::tile::{full_set, Tile};

/// Errors raised by bag operations. No bag state changes when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BagError {
    #[error("not enough tiles in bag: requested {requested}, available {available}")]
    Exhausted { requested: usize, available: usize },
}

/// The pool of undrawn tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// Builds a full, shuffled bag from the standard distribution.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut tiles = full_set();
        tiles.shuffle(rng);
        Bag { tiles }
    }

    /// Wraps an explicit tile sequence. Draws come from the end.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Bag { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Removes and returns up to `n` tiles. Fewer come back when the bag runs low.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let take = n.min(self.tiles.len());
        let start = self.tiles.len() - take;
        let mut drawn = self.tiles.split_off(start);
        drawn.reverse();
        drawn
    }

    /// Fails when fewer than `n` tiles remain.
    pub fn check_available(&self, n: usize) -> Result<(), BagError> {
        if n > self.tiles.len() {
            return Err(BagError::Exhausted {
                requested: n,
                available: self.tiles.len(),
            });
        }
        Ok(())
    }

    /// Returns tiles to the bag and reshuffles. Blank assignments are cleared.
    pub fn return_tiles(&mut self, tiles: Vec<Tile>, rng: &mut impl Rng) {
        self.tiles.extend(tiles.into_iter().map(Tile::into_reset));
        self.tiles.shuffle(rng);
    }

    /// Exchanges `tiles` for the same number of fresh ones.
    ///
    /// The swap is rejected before any mutation when the bag holds fewer tiles
    /// than are being exchanged; the caller's tiles are handed back in that case.
    pub fn exchange(
        &mut self,
        tiles: Vec<Tile>,
        rng: &mut impl Rng,
    ) -> Result<Vec<Tile>, (BagError, Vec<Tile>)> {
        let n = tiles.len();
        if let Err(e) = self.check_available(n) {
            return Err((e, tiles));
        }
        self.return_tiles(tiles, rng);
        Ok(self.draw(n))
    }
}
