//! Engine state management.
//!
//! Holds the running game, the dictionary, engine options and the RNG used
//! for bag shuffles, and writes protocol responses for each command.

use std::collections::HashMap;
use std::io::{self, Write};

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Pos;
use crate::config::EngineConfig;
use crate::dictionary::{Dictionary, Unchecked};
use crate::game::{GameState, TurnEnd, TurnError, DEFAULT_PASS_LIMIT};
use crate::protocol::notation::{encode_board, parse_board};

const NO_GAME: &str = "no game in progress";

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Option<GameState>,
    pub options: HashMap<String, String>,
    dictionary: Box<dyn Dictionary>,
    pass_limit: u32,
    rng: SmallRng,
}

fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

impl Engine {
    /// Creates an engine with no game, no dictionary and an entropy-seeded RNG.
    pub fn new() -> Self {
        Engine::with_dictionary(&EngineConfig::default(), Box::new(Unchecked))
    }

    pub fn with_dictionary(config: &EngineConfig, dictionary: Box<dyn Dictionary>) -> Self {
        if !dictionary.is_trusted() {
            warn!("running with the {} dictionary: words are not checked", dictionary.name());
        }
        Engine {
            game: None,
            options: HashMap::new(),
            dictionary,
            pass_limit: config.pass_limit,
            rng: rng_from_seed(config.seed),
        }
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dictionary.as_ref()
    }

    pub fn pass_limit(&self) -> u32 {
        self.pass_limit
    }

    /// Starts a fresh game.
    pub fn new_game(&mut self) -> &GameState {
        let mut game = GameState::new(&mut self.rng);
        game.pass_limit = self.pass_limit;
        info!("new game: {} tiles left in bag", game.bag.len());
        self.game.insert(game)
    }

    /// Replaces the board of the running game from notation. Tiles placed
    /// from the rack this turn go back to the rack first.
    pub fn set_position(&mut self, notation: &str) -> Result<(), String> {
        let game = self.game.as_mut().ok_or_else(|| NO_GAME.to_string())?;
        let board = parse_board(notation).map_err(|e| format!("failed to parse board: {}", e))?;
        let recalled = game.recall();
        if recalled > 0 {
            info!("returned {} placed tiles to the rack before loading position", recalled);
        }
        game.board = board;
        Ok(())
    }

    /// Sets an engine option. `Seed` reseeds the RNG; `PassLimit` applies to
    /// the running game as well as later ones.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        match (name.as_str(), value.as_deref()) {
            ("Seed", Some(v)) => match v.parse::<u64>() {
                Ok(seed) => self.rng = SmallRng::seed_from_u64(seed),
                Err(_) => warn!("invalid Seed value: '{}'", v),
            },
            ("PassLimit", Some(v)) => match v.parse::<u32>() {
                Ok(limit) if limit > 0 => {
                    self.pass_limit = limit;
                    if let Some(game) = self.game.as_mut() {
                        game.pass_limit = limit;
                    }
                }
                _ => warn!("invalid PassLimit value: '{}'", v),
            },
            _ => {}
        }
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Handles the WSI handshake: writes id, options and `wsiok`.
    pub fn handle_wsi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name wordsmith {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author wordsmith developers")?;
        writeln!(out, "option name Seed type spin default 0 min 0 max {}", u64::MAX)?;
        writeln!(
            out,
            "option name PassLimit type spin default {} min 1 max 100",
            DEFAULT_PASS_LIMIT
        )?;
        writeln!(out, "option name Dictionary type string default {}", self.dictionary.name())?;
        writeln!(out, "wsiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    pub fn handle_newgame<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let current = self.new_game().current;
        writeln!(out, "turn {}", current + 1)?;
        out.flush()
    }

    pub fn handle_position<W: Write>(&mut self, board: &str, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.set_position(board) {
            writeln!(out, "error {}", e)?;
        }
        out.flush()
    }

    pub fn handle_rack<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.game {
            Some(game) => {
                let player = game.current_player();
                writeln!(out, "rack {} {}", game.current + 1, player.rack.letters())?;
            }
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_place<W: Write>(
        &mut self,
        pos: Pos,
        letter: char,
        assigned: Option<char>,
        out: &mut W,
    ) -> io::Result<()> {
        match self.game.as_mut() {
            Some(game) => match game.place(pos, letter, assigned) {
                Ok(()) => {
                    let face = game.board.tile_at(pos).and_then(|t| t.face()).unwrap_or(letter);
                    writeln!(out, "placed {} {}", pos, face)?;
                }
                Err(e) => writeln!(out, "error {}", e)?,
            },
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_pickup<W: Write>(&mut self, pos: Pos, out: &mut W) -> io::Result<()> {
        match self.game.as_mut() {
            Some(game) => match game.pickup(pos) {
                Ok(()) => writeln!(out, "pickedup {}", pos)?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_recall<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.game.as_mut() {
            Some(game) => writeln!(out, "recalled {}", game.recall())?,
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    /// Handles `check`: structural validation plus the words that would be
    /// submitted. Nothing is committed and the dictionary is not consulted.
    pub fn handle_check<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.game {
            Some(game) => match game.check() {
                Ok(words) => {
                    writeln!(out, "valid")?;
                    writeln!(out, "words {}", words.join(" "))?;
                }
                Err(e) => writeln!(out, "invalid {}", e)?,
            },
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_play<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let game = match self.game.as_mut() {
            Some(g) => g,
            None => {
                writeln!(out, "error {}", NO_GAME)?;
                return out.flush();
            }
        };

        match game.play(self.dictionary.as_ref()) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "played {} {}",
                    outcome.score.total,
                    outcome.score.breakdown.join(", ")
                )?;
                write_turn_end(game, outcome.end, out)?;
            }
            Err(TurnError::DictionaryRejection(words)) => {
                writeln!(out, "invalidwords {}", words.join(" "))?;
            }
            Err(e) => writeln!(out, "rejected {}", e)?,
        }
        out.flush()
    }

    pub fn handle_swap<W: Write>(&mut self, letters: &str, out: &mut W) -> io::Result<()> {
        let game = match self.game.as_mut() {
            Some(g) => g,
            None => {
                writeln!(out, "error {}", NO_GAME)?;
                return out.flush();
            }
        };

        match game.swap(letters, &mut self.rng) {
            Ok(end) => {
                writeln!(out, "swapped {}", letters.chars().count())?;
                write_turn_end(game, end, out)?;
            }
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    pub fn handle_pass<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.game.as_mut() {
            Some(game) => match game.pass() {
                Ok(end) => {
                    writeln!(out, "passed")?;
                    write_turn_end(game, end, out)?;
                }
                Err(e) => writeln!(out, "error {}", e)?,
            },
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.game {
            Some(game) => writeln!(out, "board {}", encode_board(&game.board))?,
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }

    pub fn handle_score<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.game {
            Some(game) => writeln!(
                out,
                "score {} {}",
                game.players[0].score, game.players[1].score
            )?,
            None => writeln!(out, "error {}", NO_GAME)?,
        }
        out.flush()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

fn write_turn_end<W: Write>(game: &GameState, end: TurnEnd, out: &mut W) -> io::Result<()> {
    match end {
        TurnEnd::Next(player) => writeln!(out, "turn {}", player + 1),
        TurnEnd::GameOver => writeln!(
            out,
            "gameover {} {}",
            game.players[0].score, game.players[1].score
        ),
    }
}
