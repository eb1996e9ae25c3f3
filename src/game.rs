//! Game state and turn flow.
//!
//! `GameState` is the single authoritative value for a running game: board,
//! bag, both players, whose turn it is, and the pass counter. Every turn
//! action takes it by `&mut` and either applies fully or returns an error
//! with the state untouched.

use log::{debug, info};
use rand::Rng;

use crate::board::{Bag, BagError, Board, Pos, Rack, BLANK_CHAR};
use crate::dictionary::{check_words, Dictionary};
use crate::rules::{extract_new_words, score_turn, validate_structure, StructuralError, TurnScore};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Consecutive scoreless turns (passes and swaps) that end the game by default.
pub const DEFAULT_PASS_LIMIT: u32 = 4;

/// Why a turn action was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("game is over")]
    GameOver,

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("invalid words: {}", .0.join(", "))]
    DictionaryRejection(Vec<String>),

    #[error(transparent)]
    ResourceExhaustion(#[from] BagError),

    #[error("square {0} is occupied")]
    Occupied(Pos),

    #[error("no provisional tile at {0}")]
    NotProvisional(Pos),

    #[error("no '{0}' on rack")]
    NotOnRack(char),

    #[error("blank tile needs a letter")]
    BlankUnassigned,

    #[error("invalid letter '{0}'")]
    InvalidLetter(char),

    #[error("no tiles selected")]
    NothingSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub rack: Rack,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into(), score: 0, rack: Rack::new() }
    }
}

/// What happens after a turn ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// Play continues with the given player index.
    Next(usize),
    GameOver,
}

/// Outcome of an accepted play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub words: Vec<String>,
    pub score: TurnScore,
    pub end: TurnEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub bag: Bag,
    pub players: [Player; PLAYER_COUNT],
    pub current: usize,
    pub consecutive_passes: u32,
    pub pass_limit: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Starts a game: empty board, fresh shuffled bag, seven tiles each.
    pub fn new(rng: &mut impl Rng) -> Self {
        GameState::with_bag(Bag::generate(rng))
    }

    /// Starts a game from an explicit bag. Players draw alternately from its end.
    pub fn with_bag(mut bag: Bag) -> Self {
        let mut players = [Player::new("Player 1"), Player::new("Player 2")];
        for _ in 0..crate::board::RACK_SIZE {
            for player in players.iter_mut() {
                player.rack.extend(bag.draw(1));
            }
        }
        GameState {
            board: Board::new(),
            bag,
            players,
            current: 0,
            consecutive_passes: 0,
            pass_limit: DEFAULT_PASS_LIMIT,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    fn ensure_playing(&self) -> Result<(), TurnError> {
        if self.is_over() {
            Err(TurnError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Moves a rack tile onto an empty square as a provisional placement.
    ///
    /// `letter` picks the rack tile (`?` for a blank); a blank also needs the
    /// letter it stands for in `assigned`.
    pub fn place(&mut self, pos: Pos, letter: char, assigned: Option<char>) -> Result<(), TurnError> {
        self.ensure_playing()?;
        if self.board.is_occupied(pos) {
            return Err(TurnError::Occupied(pos));
        }
        let letter = letter.to_ascii_uppercase();
        if letter == BLANK_CHAR {
            match assigned {
                None => return Err(TurnError::BlankUnassigned),
                Some(c) if !c.is_ascii_alphabetic() => return Err(TurnError::InvalidLetter(c)),
                Some(_) => {}
            }
        }

        let rack = &mut self.players[self.current].rack;
        let mut tile = rack.take(letter).ok_or(TurnError::NotOnRack(letter))?;
        if let Some(c) = assigned.filter(|_| tile.is_blank()) {
            tile.assign(c);
        }
        if let Err(tile) = self.board.place(pos, tile) {
            rack.push(tile);
            return Err(TurnError::Occupied(pos));
        }
        Ok(())
    }

    /// Returns the provisional tile at `pos` to the current rack.
    pub fn pickup(&mut self, pos: Pos) -> Result<(), TurnError> {
        self.ensure_playing()?;
        let tile = self
            .board
            .take_provisional(pos)
            .ok_or(TurnError::NotProvisional(pos))?;
        self.players[self.current].rack.push(tile);
        Ok(())
    }

    /// Returns every provisional tile to the current rack. Returns how many moved.
    pub fn recall(&mut self) -> usize {
        let tiles = self.board.recall();
        let n = tiles.len();
        self.players[self.current].rack.extend(tiles);
        n
    }

    /// Checks the provisional placement without committing anything.
    pub fn check(&self) -> Result<Vec<String>, StructuralError> {
        validate_structure(&self.board)?;
        Ok(extract_new_words(&self.board))
    }

    /// Plays the provisional placement.
    ///
    /// Structure is validated first, then every new word goes to the
    /// dictionary. Only on acceptance is the turn scored and committed, the
    /// rack refilled, and the turn passed on. On rejection the provisional
    /// tiles stay where they are.
    pub fn play(&mut self, dictionary: &dyn Dictionary) -> Result<PlayOutcome, TurnError> {
        self.ensure_playing()?;
        validate_structure(&self.board)?;

        let words = extract_new_words(&self.board);
        debug!("checking words {:?} with {}", words, dictionary.name());
        let verdict = check_words(dictionary, &words);
        if !verdict.all_valid {
            return Err(TurnError::DictionaryRejection(verdict.invalid_words));
        }

        let score = score_turn(&self.board);
        self.board.commit();

        let player = &mut self.players[self.current];
        player.score += score.total;
        player.rack.refill(&mut self.bag);
        info!(
            "{} played {} for {} (total {})",
            player.name,
            score.breakdown.join(", "),
            score.total,
            player.score
        );

        self.consecutive_passes = 0;
        let end = if self.bag.is_empty() && self.players[self.current].rack.is_empty() {
            self.finish("rack and bag exhausted")
        } else {
            self.advance()
        };

        Ok(PlayOutcome { words, score, end })
    }

    /// Exchanges rack tiles for fresh ones from the bag. Costs the turn.
    ///
    /// Provisional tiles are recalled first. The swap is refused, with no
    /// change to the game, when the bag holds fewer tiles than requested or
    /// the letters are not on the rack.
    pub fn swap(&mut self, letters: &str, rng: &mut impl Rng) -> Result<TurnEnd, TurnError> {
        self.ensure_playing()?;
        if letters.is_empty() {
            return Err(TurnError::NothingSelected);
        }
        self.bag.check_available(letters.chars().count())?;

        let mut available = self.players[self.current].rack.clone();
        available.extend(
            self.board
                .provisional_squares()
                .iter()
                .filter_map(|sq| sq.tile().cloned()),
        );
        available.select(letters).map_err(TurnError::NotOnRack)?;

        self.recall();
        let rack = &mut self.players[self.current].rack;
        let ids = rack.select(letters).map_err(TurnError::NotOnRack)?;
        let returning = ids.into_iter().filter_map(|id| rack.take_by_id(id)).collect::<Vec<_>>();
        let n = returning.len();

        let fresh = match self.bag.exchange(returning, rng) {
            Ok(fresh) => fresh,
            Err((e, back)) => {
                rack.extend(back);
                return Err(e.into());
            }
        };
        rack.extend(fresh);
        info!("{} swapped {} tile(s)", self.players[self.current].name, n);
        Ok(self.scoreless_turn())
    }

    /// Gives up the turn. Provisional tiles go back to the rack.
    pub fn pass(&mut self) -> Result<TurnEnd, TurnError> {
        self.ensure_playing()?;
        self.recall();
        info!("{} passed", self.players[self.current].name);
        Ok(self.scoreless_turn())
    }

    fn scoreless_turn(&mut self) -> TurnEnd {
        self.consecutive_passes += 1;
        if self.consecutive_passes >= self.pass_limit {
            self.finish("too many consecutive passes")
        } else {
            self.advance()
        }
    }

    fn advance(&mut self) -> TurnEnd {
        self.current = (self.current + 1) % PLAYER_COUNT;
        TurnEnd::Next(self.current)
    }

    fn finish(&mut self, reason: &str) -> TurnEnd {
        self.phase = GamePhase::GameOver;
        info!(
            "game over ({}): {} {} - {} {}",
            reason,
            self.players[0].name,
            self.players[0].score,
            self.players[1].name,
            self.players[1].score
        );
        TurnEnd::GameOver
    }
}
