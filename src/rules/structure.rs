//! Structural legality of a provisional placement.
//!
//! Checks shape and connectivity only; whether the words exist is the
//! dictionary's business. Checks run in a fixed order and the first failure
//! is reported.

use std::collections::BTreeSet;

use crate::board::{Board, Pos, CENTER};

/// Why a provisional placement is structurally illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StructuralError {
    #[error("no tiles placed")]
    NoTilesPlaced,

    #[error("must form a straight line")]
    NotLinear,

    #[error("gaps in word")]
    Gaps,

    #[error("first word must cross center")]
    FirstMoveOffCenter,

    #[error("first word must be at least two letters")]
    FirstMoveTooShort,

    #[error("must connect to existing tiles")]
    Disconnected,
}

/// The line a placement lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(u8),
    Column(u8),
}

/// Validates the current provisional placement.
pub fn validate_structure(board: &Board) -> Result<(), StructuralError> {
    let placed: Vec<Pos> = board.provisional_squares().iter().map(|sq| sq.pos()).collect();
    if placed.is_empty() {
        return Err(StructuralError::NoTilesPlaced);
    }

    let line = placement_line(&placed)?;
    check_continuity(board, &placed, line)?;

    if board.has_committed_tiles() {
        check_connected(board, &placed)
    } else {
        check_first_move(&placed)
    }
}

/// Determines the row or column shared by every placed tile.
///
/// A single tile lies on both; its row is reported.
pub fn placement_line(placed: &[Pos]) -> Result<Line, StructuralError> {
    let rows: BTreeSet<u8> = placed.iter().map(|p| p.row).collect();
    let cols: BTreeSet<u8> = placed.iter().map(|p| p.col).collect();

    match (rows.len(), cols.len()) {
        (1, _) => Ok(Line::Row(placed[0].row)),
        (_, 1) => Ok(Line::Column(placed[0].col)),
        _ => Err(StructuralError::NotLinear),
    }
}

/// Every square between the outermost placed tiles must hold a tile.
fn check_continuity(board: &Board, placed: &[Pos], line: Line) -> Result<(), StructuralError> {
    let span = |coords: Vec<u8>| {
        let min = coords.iter().copied().min().unwrap_or(0);
        let max = coords.iter().copied().max().unwrap_or(0);
        min..=max
    };

    let gap = match line {
        Line::Row(row) => span(placed.iter().map(|p| p.col).collect())
            .any(|col| !board.is_occupied(Pos { row, col })),
        Line::Column(col) => span(placed.iter().map(|p| p.row).collect())
            .any(|row| !board.is_occupied(Pos { row, col })),
    };

    if gap {
        Err(StructuralError::Gaps)
    } else {
        Ok(())
    }
}

fn check_first_move(placed: &[Pos]) -> Result<(), StructuralError> {
    if !placed.contains(&CENTER) {
        return Err(StructuralError::FirstMoveOffCenter);
    }
    if placed.len() < 2 {
        return Err(StructuralError::FirstMoveTooShort);
    }
    Ok(())
}

/// At least one placed tile must touch a committed tile orthogonally.
///
/// Continuity already forces a gap-bridging placement to be adjacent to the
/// committed tiles inside the gap, so adjacency alone is enough here.
fn check_connected(board: &Board, placed: &[Pos]) -> Result<(), StructuralError> {
    let touches = placed
        .iter()
        .flat_map(|p| p.neighbours())
        .any(|n| board.square(n).is_committed());
    if touches {
        Ok(())
    } else {
        Err(StructuralError::Disconnected)
    }
}
