//! WSI protocol handling.
//!
//! Board notation for positions and the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_board, parse_board, NotationError};
pub use parser::{parse_command, Command};
