//! WSI command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the engine main loop can dispatch on.

use log::warn;

use crate::board::Pos;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Wsi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a new game with a fresh bag and racks.
    NewGame,

    /// Replace the board of the running game from board notation.
    Position { board: String },

    /// Show the rack of the player to move.
    Rack,

    /// Place a rack tile provisionally: `place <sq> <letter> [<assigned>]`.
    Place {
        pos: Pos,
        letter: char,
        assigned: Option<char>,
    },

    /// Return a provisional tile to the rack.
    Pickup { pos: Pos },

    /// Return all provisional tiles to the rack.
    Recall,

    /// Validate the provisional placement without playing it.
    Check,

    /// Play the provisional placement.
    Play,

    /// Exchange the given rack letters with the bag.
    Swap { letters: String },

    /// Give up the turn.
    Pass,

    /// Print the board in notation.
    Board,

    /// Print both players' scores.
    Score,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "wsi" => Some(Command::Wsi),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "rack" => Some(Command::Rack),
        "recall" => Some(Command::Recall),
        "check" => Some(Command::Check),
        "play" => Some(Command::Play),
        "pass" => Some(Command::Pass),
        "board" => Some(Command::Board),
        "score" => Some(Command::Score),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "place" => parse_place(&tokens),
        "pickup" => parse_pickup(&tokens),
        "swap" => parse_swap(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <board>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [_, board] => Some(Command::Position { board: board.to_string() }),
        _ => {
            warn!("malformed position: expected 'position <board>'");
            None
        }
    }
}

fn parse_square(token: &str) -> Option<Pos> {
    match token.parse::<Pos>() {
        Ok(pos) => Some(pos),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Parses a single-character letter argument.
fn parse_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => {
            warn!("expected a single letter, got '{}'", token);
            None
        }
    }
}

/// Parses `place <sq> <letter> [<assigned>]`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if !(3..=4).contains(&tokens.len()) {
        warn!("malformed place: expected 'place <sq> <letter> [<assigned>]'");
        return None;
    }
    let pos = parse_square(tokens[1])?;
    let letter = parse_letter(tokens[2])?;
    let assigned = match tokens.get(3) {
        Some(t) => Some(parse_letter(t)?),
        None => None,
    };
    Some(Command::Place { pos, letter, assigned })
}

/// Parses `pickup <sq>`.
fn parse_pickup(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed pickup: expected 'pickup <sq>'");
        return None;
    }
    parse_square(tokens[1]).map(|pos| Command::Pickup { pos })
}

/// Parses `swap <letters>`. Letters may be given as one word or separated.
fn parse_swap(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed swap: expected 'swap <letters>'");
        return None;
    }
    let letters = tokens[1..].concat().to_ascii_uppercase();
    Some(Command::Swap { letters })
}
