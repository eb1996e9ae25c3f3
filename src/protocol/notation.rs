//! Board notation encoding and decoding.
//!
//! A board is written as 15 ranks separated by `/`, top row first, in the
//! style of chess FEN:
//!
//! - a run of digits is that many empty squares,
//! - an upper-case letter is a committed tile,
//! - a lower-case letter is a provisional tile,
//! - a letter followed by `?` is a blank standing for that letter.
//!
//! Example: the first word `CAT` placed through the center but not yet played
//! is `15/15/15/15/15/15/15/6cat6/15/15/15/15/15/15/15`.

use crate::board::{Board, Pos, Tile, TileId, BOARD_SIZE, BLANK_CHAR, TILE_COUNT};

/// Errors that can occur while parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 15 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} covers {len} squares, expected 15")]
    WrongRankLength { rank: usize, len: usize },

    #[error("invalid character in board notation: '{0}'")]
    InvalidChar(char),

    #[error("blank marker '?' without a letter in rank {0}")]
    DanglingBlank(usize),

    #[error("empty-square run of zero in rank {0}")]
    ZeroRun(usize),
}

/// Parses board notation into a board.
///
/// Tiles get fresh ids starting past the standard set so they never collide
/// with tiles drawn from a bag.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::new();
    let mut next_id = TILE_COUNT as u16;

    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        let mut run = 0usize;
        let mut chars = rank.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some(d) = c.to_digit(10) {
                run = run * 10 + d as usize;
                if col + run > BOARD_SIZE {
                    return Err(NotationError::WrongRankLength { rank: row + 1, len: col + run });
                }
                if chars.peek().map_or(true, |n| !n.is_ascii_digit()) {
                    if run == 0 {
                        return Err(NotationError::ZeroRun(row + 1));
                    }
                    col += run;
                    run = 0;
                }
                continue;
            }
            if c == BLANK_CHAR {
                return Err(NotationError::DanglingBlank(row + 1));
            }
            if !c.is_ascii_alphabetic() {
                return Err(NotationError::InvalidChar(c));
            }

            let id = TileId(next_id);
            next_id += 1;
            let tile = if chars.next_if_eq(&BLANK_CHAR).is_some() {
                let mut blank = Tile::blank(id);
                blank.assign(c);
                blank
            } else {
                Tile::standard(id, c).ok_or(NotationError::InvalidChar(c))?
            };

            let pos = Pos::new(row, col).ok_or(NotationError::WrongRankLength {
                rank: row + 1,
                len: col + 1,
            })?;
            let placed = if c.is_ascii_lowercase() {
                board.place(pos, tile)
            } else {
                board.place_committed(pos, tile)
            };
            // The square is fresh, so placement only fails on a malformed rank.
            placed.map_err(|_| NotationError::WrongRankLength { rank: row + 1, len: col + 1 })?;
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(NotationError::WrongRankLength { rank: row + 1, len: col });
        }
    }

    Ok(board)
}

/// Encodes a board into canonical notation.
pub fn encode_board(board: &Board) -> String {
    let mut result = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));

    for row in 0..BOARD_SIZE {
        if row > 0 {
            result.push('/');
        }
        let mut empty = 0;
        for col in 0..BOARD_SIZE {
            let square = &board.squares()[row * BOARD_SIZE + col];
            let tile = match square.tile() {
                Some(t) => t,
                None => {
                    empty += 1;
                    continue;
                }
            };
            if empty > 0 {
                result.push_str(&empty.to_string());
                empty = 0;
            }
            let face = tile.face().unwrap_or(BLANK_CHAR);
            if square.is_provisional() {
                result.push(face.to_ascii_lowercase());
            } else {
                result.push(face);
            }
            if tile.is_blank() {
                result.push(BLANK_CHAR);
            }
        }
        if empty > 0 {
            result.push_str(&empty.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;

    const EMPTY: &str = "15/15/15/15/15/15/15/15/15/15/15/15/15/15/15";
    const CAT_PROVISIONAL: &str = "15/15/15/15/15/15/15/6cat6/15/15/15/15/15/15/15";

    #[test]
    fn parse_empty_board() {
        let board = parse_board(EMPTY).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(encode_board(&board), EMPTY);
    }

    #[test]
    fn parse_provisional_word() {
        let board = parse_board(CAT_PROVISIONAL).unwrap();
        assert_eq!(board.provisional_count(), 3);
        assert!(!board.has_committed_tiles());
        assert_eq!(board.tile_at(CENTER).unwrap().face(), Some('A'));
        assert_eq!(board.tile_at(CENTER).unwrap().value(), 1);
    }

    #[test]
    fn committed_and_blank_tiles() {
        let s = "15/15/15/15/15/15/15/6CA?T6/15/15/15/15/15/15/15";
        let board = parse_board(s).unwrap();
        assert!(board.square(CENTER).is_committed());
        let blank = board.tile_at(CENTER).unwrap();
        assert!(blank.is_blank());
        assert_eq!(blank.face(), Some('A'));
        assert_eq!(blank.value(), 0);
        assert_eq!(encode_board(&board), s);
    }

    #[test]
    fn encode_round_trips_mixed_board() {
        let s = "T14/15/15/15/15/15/15/4CAts7/7b?7/15/15/15/15/15/14z";
        let board = parse_board(s).unwrap();
        assert_eq!(encode_board(&board), s);
        assert_eq!(board.provisional_count(), 4);
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(parse_board("15/15"), Err(NotationError::WrongRankCount(2)));
    }

    #[test]
    fn rank_too_short_or_long() {
        let short = "14/15/15/15/15/15/15/15/15/15/15/15/15/15/15";
        assert_eq!(
            parse_board(short),
            Err(NotationError::WrongRankLength { rank: 1, len: 14 })
        );
        let long = "15a/15/15/15/15/15/15/15/15/15/15/15/15/15/15";
        assert!(matches!(
            parse_board(long),
            Err(NotationError::WrongRankLength { rank: 1, .. })
        ));
    }

    #[test]
    fn oversized_run_is_rejected() {
        let s = format!("99999999999999999999999{}", "/15".repeat(14));
        assert_eq!(
            parse_board(&s),
            Err(NotationError::WrongRankLength { rank: 1, len: 99 })
        );
        let s = "15/15/15/15/15/15/15/7a16/15/15/15/15/15/15/15";
        assert_eq!(
            parse_board(s),
            Err(NotationError::WrongRankLength { rank: 8, len: 24 })
        );
    }

    #[test]
    fn invalid_characters() {
        let s = "15/15/15/15/15/15/15/7*7/15/15/15/15/15/15/15";
        assert_eq!(parse_board(s), Err(NotationError::InvalidChar('*')));
        let s = "15/15/15/15/15/15/15/7?7/15/15/15/15/15/15/15";
        assert_eq!(parse_board(s), Err(NotationError::DanglingBlank(8)));
        let s = "15/15/15/15/15/15/15/0a14/15/15/15/15/15/15/15";
        assert_eq!(parse_board(s), Err(NotationError::ZeroRun(8)));
    }
}
