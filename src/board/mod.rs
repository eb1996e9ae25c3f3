//! Board representation and game-piece types.
//!
//! Contains the core data structures for squares, tiles, the bag, racks,
//! and the overall board state.

pub mod bag;
pub mod rack;
pub mod square;
pub mod state;
pub mod tile;

pub use bag::{Bag, BagError};
pub use rack::{Rack, RACK_SIZE};
pub use square::{
    is_in_bounds, Direction, Multiplier, ParsePosError, Pos, Square, BOARD_SIZE, CENTER, LAYOUT,
    SQUARE_COUNT,
};
pub use state::Board;
pub use tile::{full_set, letter_value, Tile, TileId, BLANK_CHAR, DISTRIBUTION, TILE_COUNT};
