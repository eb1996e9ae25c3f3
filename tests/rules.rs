//! Rule scenarios exercised through the public library API.
//!
//! Positions are set up with board notation: upper-case letters are
//! committed tiles, lower-case letters are this turn's placements.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use wordsmith::board::{Bag, BagError, Board, Tile, TileId};
use wordsmith::dictionary::{CommandDictionary, Unchecked, WordList, VALIDATION_FAILED_MARKER};
use wordsmith::game::{GameState, TurnError};
use wordsmith::protocol::notation::{encode_board, parse_board};
use wordsmith::rules::{extract_new_words, new_words, score_turn, validate_structure, StructuralError};

/// Builds a 15-rank board from the given rows; unspecified rows are empty.
fn board(rows: &[(usize, &str)]) -> Board {
    let mut ranks = vec!["15".to_string(); 15];
    for (row, rank) in rows {
        ranks[*row] = rank.to_string();
    }
    parse_board(&ranks.join("/")).unwrap()
}

#[test]
fn empty_placement_is_rejected() {
    let b = Board::new();
    let err = validate_structure(&b).unwrap_err();
    assert_eq!(err, StructuralError::NoTilesPlaced);
    assert_eq!(err.to_string(), "no tiles placed");
}

#[test]
fn l_shape_is_not_linear() {
    let b = board(&[(7, "7ca6"), (8, "7t7")]);
    assert_eq!(
        validate_structure(&b).map_err(|e| e.to_string()),
        Err("must form a straight line".to_string())
    );
}

#[test]
fn first_move_rules() {
    let off_center = board(&[(0, "cat12")]);
    assert_eq!(validate_structure(&off_center), Err(StructuralError::FirstMoveOffCenter));

    let single = board(&[(7, "7a7")]);
    assert_eq!(validate_structure(&single), Err(StructuralError::FirstMoveTooShort));

    let ok = board(&[(7, "6cat6")]);
    assert_eq!(validate_structure(&ok), Ok(()));
}

#[test]
fn later_moves_must_connect() {
    let b = board(&[(7, "6CAT6"), (2, "dog12")]);
    assert_eq!(validate_structure(&b), Err(StructuralError::Disconnected));

    let b = board(&[(7, "6CATs5")]);
    assert_eq!(validate_structure(&b), Ok(()));
}

#[test]
fn gap_filled_by_committed_tile_is_continuous() {
    let b = board(&[(7, "6cAt6")]);
    let b2 = {
        let mut b2 = b.clone();
        b2.commit();
        b2
    };
    assert_eq!(validate_structure(&b), Ok(()));
    assert_eq!(validate_structure(&b2), Err(StructuralError::NoTilesPlaced));

    let gap = board(&[(7, "6CAT6"), (8, "5a1t7")]);
    assert_eq!(validate_structure(&gap), Err(StructuralError::Gaps));
}

#[test]
fn extracted_words_are_new_and_longer_than_one() {
    let b = board(&[(6, "7A7"), (7, "6CAT6"), (8, "6ox7")]);
    for word in new_words(&b) {
        assert!(word.len() >= 2, "single-letter word {:?}", word.text);
        assert!(
            word.squares.iter().any(|&p| b.square(p).is_provisional()),
            "committed-only word {:?}",
            word.text
        );
    }
    assert_eq!(extract_new_words(&b), vec!["OX", "CO", "AAX"]);
}

#[test]
fn cat_through_center_scores_ten() {
    let b = board(&[(7, "6cat6")]);
    let score = score_turn(&b);
    assert_eq!(score.total, 10);
    assert_eq!(score.breakdown, vec!["CAT (10)"]);
    assert!(!score.bingo);
}

#[test]
fn seven_tiles_earn_one_bonus() {
    let b = board(&[(7, "4retains4")]);
    let score = score_turn(&b);
    assert!(score.bingo);
    assert_eq!(score.total, 7 * 2 + 50);
    assert_eq!(score.breakdown.iter().filter(|s| s.starts_with("BINGO")).count(), 1);

    let six = board(&[(7, "4retain5")]);
    assert!(!score_turn(&six).bingo);
}

#[test]
fn rescoring_after_commit_is_zero() {
    let mut b = board(&[(7, "6cat6")]);
    assert_eq!(score_turn(&b).total, 10);
    b.commit();
    assert_eq!(score_turn(&b).total, 0);
    assert!(extract_new_words(&b).is_empty());
}

#[test]
fn notation_round_trip_preserves_board() {
    let s = "15/15/15/15/15/15/7D7/6CAt?6/7g7/15/15/15/15/15/15";
    let b = parse_board(s).unwrap();
    assert_eq!(encode_board(&b), s);
}

fn bag_of(letters: &str) -> Bag {
    Bag::from_tiles(
        letters
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '?' => Tile::blank(TileId(i as u16)),
                _ => Tile::standard(TileId(i as u16), c).unwrap(),
            })
            .collect(),
    )
}

#[test]
fn place_then_recall_restores_board_and_blanks() {
    // Draws alternate from the bag end: player 1 is dealt C T ? A S Z Y.
    let mut game = GameState::with_bag(bag_of("EEEEEEEEEEEEEEEEEEEEEXEYEZESEAE?ETEC"));
    let board_before = game.board.clone();
    let rack_before = game.players[0].rack.clone();

    game.place("g8".parse().unwrap(), 'C', None).unwrap();
    game.place("h8".parse().unwrap(), '?', Some('A')).unwrap();
    game.place("i8".parse().unwrap(), 'T', None).unwrap();
    assert_eq!(game.recall(), 3);

    assert_eq!(game.board, board_before);
    let mut after: Vec<char> = game.players[0].rack.letters().chars().collect();
    let mut before: Vec<char> = rack_before.letters().chars().collect();
    after.sort_unstable();
    before.sort_unstable();
    assert_eq!(after, before);
    let blank = game.players[0].rack.tiles().iter().find(|t| t.is_blank()).unwrap();
    assert_eq!(blank.face(), None);
    assert_eq!(blank.value(), 0);
}

#[test]
fn swap_more_than_bag_holds_is_refused() {
    let mut rng = SmallRng::seed_from_u64(5);
    // 14 tiles dealt, 2 left.
    let mut game = GameState::with_bag(bag_of("QZABCDEFGHIJKLMN"));
    assert_eq!(game.bag.len(), 2);
    let before = game.clone();
    let letters: String = game.players[0].rack.letters().chars().take(3).collect();

    let err = game.swap(&letters, &mut rng).unwrap_err();
    assert_eq!(
        err,
        TurnError::ResourceExhaustion(BagError::Exhausted { requested: 3, available: 2 })
    );
    assert_eq!(game, before);
}

#[test]
fn dictionary_rejection_keeps_placement() {
    let mut game = GameState::with_bag(bag_of("EEEEEEEEEEEEEEEEEEEEEXEYEZESEAEOETEC"));
    game.place("g8".parse().unwrap(), 'C', None).unwrap();
    game.place("h8".parse().unwrap(), 'A', None).unwrap();
    game.place("i8".parse().unwrap(), 'T', None).unwrap();

    let dict = WordList::from_words(["DOG"]);
    assert_eq!(game.play(&dict), Err(TurnError::DictionaryRejection(vec!["CAT".to_string()])));
    assert_eq!(game.board.provisional_count(), 3);
    assert_eq!(game.players[0].score, 0);
    assert_eq!(game.current, 0);

    let outcome = game.play(&Unchecked).unwrap();
    assert_eq!(outcome.score.total, 10);
    assert_eq!(game.players[0].score, 10);
}

#[cfg(unix)]
#[test]
fn unreachable_validator_fails_closed() {
    let mut game = GameState::with_bag(bag_of("EEEEEEEEEEEEEEEEEEEEEXEYEZESEAEOETEC"));
    game.place("h8".parse().unwrap(), 'A', None).unwrap();
    game.place("i8".parse().unwrap(), 'T', None).unwrap();

    let dict = CommandDictionary::new("/nonexistent/validator", Vec::new());
    assert_eq!(
        game.play(&dict),
        Err(TurnError::DictionaryRejection(vec![VALIDATION_FAILED_MARKER.to_string()]))
    );
    assert_eq!(game.board.provisional_count(), 2);
}
