//! Wordsmith -- a tile-placement word game engine speaking the WSI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr so they never interleave with protocol output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use wordsmith::config::{ConfigError, DictionaryConfig, EngineConfig};
use wordsmith::engine::Engine;
use wordsmith::protocol::parser::{parse_command, Command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for bag shuffles (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Word list to validate against (overrides the config file)
    #[arg(long)]
    word_list: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn load_config(args: &Args) -> Result<EngineConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(path) = &args.word_list {
        config.dictionary = DictionaryConfig::WordList { path: path.clone() };
    }
    Ok(config)
}

fn build_engine(args: &Args) -> Result<Engine, ConfigError> {
    let config = load_config(args)?;
    let dictionary = config.dictionary.build()?;
    Ok(Engine::with_dictionary(&config, dictionary))
}

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn run(mut engine: Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Wsi => engine.handle_wsi(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => engine.handle_newgame(&mut out)?,
            Command::Position { board } => engine.handle_position(&board, &mut out)?,
            Command::Rack => engine.handle_rack(&mut out)?,
            Command::Place { pos, letter, assigned } => {
                engine.handle_place(pos, letter, assigned, &mut out)?
            }
            Command::Pickup { pos } => engine.handle_pickup(pos, &mut out)?,
            Command::Recall => engine.handle_recall(&mut out)?,
            Command::Check => engine.handle_check(&mut out)?,
            Command::Play => engine.handle_play(&mut out)?,
            Command::Swap { letters } => engine.handle_swap(&letters, &mut out)?,
            Command::Pass => engine.handle_pass(&mut out)?,
            Command::Board => engine.handle_board(&mut out)?,
            Command::Score => engine.handle_score(&mut out)?,
            Command::Quit => break,
        }
    }

    info!("shutting down");
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let engine = match build_engine(&args) {
        Ok(e) => e,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(engine) {
        error!("fatal error: {}", e);
        process::exit(1);
    }
}
